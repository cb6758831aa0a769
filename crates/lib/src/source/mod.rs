//! Reading content documents from disk.
//!
//! Partitions and manifests are plain YAML or JSON files. The format is picked
//! from the file extension; parse errors keep the path so authors can find the
//! broken file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Yaml,
  Json,
}

impl Format {
  /// Detect the format from a path's extension.
  pub fn from_path(path: &Path) -> Option<Self> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
      "yaml" | "yml" => Some(Format::Yaml),
      "json" => Some(Format::Json),
      _ => None,
    }
  }

  pub fn extension(self) -> &'static str {
    match self {
      Format::Yaml => "yaml",
      Format::Json => "json",
    }
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

/// Errors that can occur while reading a content document.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse {}: {message}", path.display())]
  Parse { path: PathBuf, message: String },

  #[error("unsupported file format for {} (expected .yaml, .yml or .json)", path.display())]
  UnsupportedFormat { path: PathBuf },
}

/// Parse a document from an in-memory string.
pub fn parse_document<T: DeserializeOwned>(content: &str, format: Format, path: &Path) -> Result<T, LoadError> {
  let parsed = match format {
    Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
  };

  parsed.map_err(|message| LoadError::Parse {
    path: path.to_path_buf(),
    message,
  })
}

/// Read and parse a document, detecting the format from its extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
  let format = Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
    path: path.to_path_buf(),
  })?;

  debug!(path = ?path, format = %format, "reading content document");

  let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  parse_document(&content, format, path)
}
