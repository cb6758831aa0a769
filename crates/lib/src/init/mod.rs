//! Initialize a new language directory.
//!
//! This module provides the core logic for the `docpack init` command, which
//! scaffolds a language directory with:
//! - `language.yaml` manifest with placeholder metadata
//! - `part1.yaml` partition holding one valid example entry

mod templates;

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

pub use templates::{LANGUAGE_YAML_TEMPLATE, PARTITION_YAML_TEMPLATE, render};

/// Errors that can occur during initialization.
#[derive(Debug, Error)]
pub enum InitError {
  #[error("file already exists: {}", path.display())]
  PathExists { path: PathBuf },

  #[error("invalid language id `{id}`: use lowercase letters, digits and dashes")]
  InvalidId { id: String },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to canonicalize path {}: {source}", path.display())]
  Canonicalize { path: PathBuf, source: std::io::Error },
}

/// Options for initializing a language directory.
pub struct InitOptions {
  /// Directory to create (usually `<content root>/<id>`)
  pub language_dir: PathBuf,
  /// Language id, e.g. `cpp`
  pub id: String,
  /// Display label; defaults to the id
  pub label: Option<String>,
}

/// Result of a successful initialization.
#[derive(Debug)]
pub struct InitResult {
  /// The language directory (canonicalized)
  pub language_dir: PathBuf,
  /// Path to created language.yaml
  pub manifest: PathBuf,
  /// Path to created part1.yaml
  pub partition: PathBuf,
}

fn is_valid_id(id: &str) -> bool {
  !id.is_empty()
    && !id.starts_with('-')
    && id
      .chars()
      .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Initialize a new language directory.
///
/// # Errors
///
/// Returns an error if:
/// - the id is not a slug
/// - `language.yaml` or `part1.yaml` already exist
/// - directory creation or file writing fails
pub fn init(options: &InitOptions) -> Result<InitResult, InitError> {
  if !is_valid_id(&options.id) {
    return Err(InitError::InvalidId {
      id: options.id.clone(),
    });
  }

  fs::create_dir_all(&options.language_dir).map_err(|e| InitError::CreateDir {
    path: options.language_dir.clone(),
    source: e,
  })?;

  let language_dir = dunce::canonicalize(&options.language_dir).map_err(|e| InitError::Canonicalize {
    path: options.language_dir.clone(),
    source: e,
  })?;

  let manifest = language_dir.join("language.yaml");
  let partition = language_dir.join("part1.yaml");

  for path in [&manifest, &partition] {
    if path.exists() {
      return Err(InitError::PathExists { path: path.clone() });
    }
  }

  let label = options.label.as_deref().unwrap_or(&options.id);

  fs::write(&manifest, render(LANGUAGE_YAML_TEMPLATE, &options.id, label)).map_err(|e| InitError::WriteFile {
    path: manifest.clone(),
    source: e,
  })?;

  fs::write(&partition, render(PARTITION_YAML_TEMPLATE, &options.id, label)).map_err(|e| InitError::WriteFile {
    path: partition.clone(),
    source: e,
  })?;

  info!(language = %options.id, dir = ?language_dir, "initialized language directory");

  Ok(InitResult {
    language_dir,
    manifest,
    partition,
  })
}
