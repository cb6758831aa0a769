//! Assembling partitions into a language configuration.
//!
//! Assembly is plain concatenation: categories keep the order of their
//! partition, and partitions keep the order they are passed in. Nothing is
//! deduplicated, reordered or checked here; that is the validator's job.

use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::manifest::LanguageManifest;
use crate::partition::Partition;
use crate::schema::{LanguageConfig, LanguageMeta};
use crate::source::LoadError;

/// Concatenate partitions into one [`LanguageConfig`].
///
/// The result's categories are the partitions' categories in order. Calling
/// this twice with the same inputs yields deep-equal configs.
pub fn assemble(meta: LanguageMeta, partitions: &[Partition]) -> LanguageConfig {
  let categories = partitions
    .iter()
    .flat_map(|partition| partition.categories.iter().cloned())
    .collect();

  LanguageConfig { meta, categories }
}

/// Which partition each assembled category came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
  spans: Vec<PartitionSpan>,
}

/// A run of category indices contributed by one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSpan {
  pub partition: String,
  pub categories: Range<usize>,
}

impl Provenance {
  pub fn from_partitions(partitions: &[Partition]) -> Self {
    let mut start = 0;
    let spans = partitions
      .iter()
      .map(|partition| {
        let end = start + partition.categories.len();
        let span = PartitionSpan {
          partition: partition.name.clone(),
          categories: start..end,
        };
        start = end;
        span
      })
      .collect();

    Self { spans }
  }

  /// Name of the partition that declared the category at `index`.
  pub fn partition_of(&self, category_index: usize) -> Option<&str> {
    self
      .spans
      .iter()
      .find(|span| span.categories.contains(&category_index))
      .map(|span| span.partition.as_str())
  }

  pub fn spans(&self) -> &[PartitionSpan] {
    &self.spans
  }
}

/// A language assembled from its manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedLanguage {
  pub config: LanguageConfig,
  pub provenance: Provenance,
  pub manifest_path: PathBuf,
}

/// Load a manifest and every partition it lists, then assemble them.
///
/// # Errors
///
/// Returns the first load error encountered; a language is never assembled
/// from a subset of its partitions.
pub fn load_language(manifest_path: &Path) -> Result<LoadedLanguage, LoadError> {
  let manifest = LanguageManifest::load(manifest_path)?;

  let partitions = manifest
    .partition_paths(manifest_path)
    .iter()
    .map(|path| {
      let partition = Partition::load(path)?;
      debug!(
        partition = %partition.name,
        categories = partition.categories.len(),
        entries = partition.entry_count(),
        "loaded partition"
      );
      Ok(partition)
    })
    .collect::<Result<Vec<_>, LoadError>>()?;

  let provenance = Provenance::from_partitions(&partitions);
  let config = assemble(manifest.meta, &partitions);

  info!(
    language = %config.id(),
    partitions = partitions.len(),
    categories = config.categories.len(),
    entries = config.entry_count(),
    "assembled language"
  );

  Ok(LoadedLanguage {
    config,
    provenance,
    manifest_path: manifest_path.to_path_buf(),
  })
}
