//! Manifest types for docpack.
//!
//! The manifest is the explicit record of how a language is assembled. Its
//! `partitions` list is the only source of category order: partitions are
//! concatenated exactly as listed, whatever their file names.
//!
//! # Example
//!
//! ```yaml
//! id: cpp
//! label: C++
//! icon: cpp
//! color: "#00599C"
//! officialUrl: https://isocpp.org
//! tagline: Performance with zero-cost abstractions
//! playgroundUrl: https://godbolt.org
//! executionApiId: cpp17
//! partitions:
//!   - part1.yaml
//!   - part2.yaml
//! ```
//!
//! Partition paths are relative to the manifest's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::MANIFEST_STEM;
use crate::schema::LanguageMeta;
use crate::source::{LoadError, read_document};

/// Extensions tried, in order, when looking for a manifest in a directory.
pub const MANIFEST_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Language metadata plus the ordered partition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ManifestDocument")]
pub struct LanguageManifest {
  #[serde(flatten)]
  pub meta: LanguageMeta,
  /// Partition files, in display order.
  pub partitions: Vec<PathBuf>,
}

/// On-disk shape of a manifest, spelled out field by field so stray keys are
/// rejected. `flatten` and `deny_unknown_fields` do not mix.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ManifestDocument {
  id: String,
  label: String,
  icon: String,
  color: String,
  official_url: String,
  tagline: String,
  playground_url: String,
  execution_api_id: String,
  partitions: Vec<PathBuf>,
}

impl From<ManifestDocument> for LanguageManifest {
  fn from(doc: ManifestDocument) -> Self {
    LanguageManifest {
      meta: LanguageMeta {
        id: doc.id,
        label: doc.label,
        icon: doc.icon,
        color: doc.color,
        official_url: doc.official_url,
        tagline: doc.tagline,
        playground_url: doc.playground_url,
        execution_api_id: doc.execution_api_id,
      },
      partitions: doc.partitions,
    }
  }
}

impl LanguageManifest {
  /// Load a manifest file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed.
  pub fn load(path: &Path) -> Result<Self, LoadError> {
    read_document(path)
  }

  /// Partition paths resolved against the manifest's directory.
  pub fn partition_paths(&self, manifest_path: &Path) -> Vec<PathBuf> {
    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    self.partitions.iter().map(|p| base.join(p)).collect()
  }
}

/// Find the manifest file inside a language directory.
///
/// Returns `None` if the directory holds no `language.{yaml,yml,json}`.
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
  MANIFEST_EXTENSIONS
    .iter()
    .map(|ext| dir.join(format!("{MANIFEST_STEM}.{ext}")))
    .find(|candidate| candidate.is_file())
}
