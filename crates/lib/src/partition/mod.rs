//! Category partitions.
//!
//! A partition is one content file holding an ordered list of categories.
//! Splitting a language across partitions only keeps files manageable; the
//! split carries no meaning and the manifest decides the final order.
//!
//! # File Format
//!
//! ```yaml
//! name: oop            # optional, defaults to the file stem
//! categories:
//!   - id: oop
//!     label: Object-Oriented Programming
//!     icon: boxes
//!     entries: [...]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::DocCategory;
use crate::source::{LoadError, read_document};

/// A named, ordered list of categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
  pub name: String,
  pub categories: Vec<DocCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartitionDocument {
  #[serde(default)]
  name: Option<String>,
  categories: Vec<DocCategory>,
}

impl Partition {
  pub fn new(name: impl Into<String>, categories: Vec<DocCategory>) -> Self {
    Self {
      name: name.into(),
      categories,
    }
  }

  /// Load a partition from a YAML or JSON file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, has an unsupported
  /// extension, or does not match the category schema.
  pub fn load(path: &Path) -> Result<Self, LoadError> {
    let doc: PartitionDocument = read_document(path)?;
    let name = doc.name.unwrap_or_else(|| {
      path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
    });

    Ok(Self {
      name,
      categories: doc.categories,
    })
  }

  pub fn entry_count(&self) -> usize {
    self.categories.iter().map(|c| c.entries.len()).sum()
  }
}
