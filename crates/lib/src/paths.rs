//! Content root resolution.

use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_CONTENT_ROOT, ROOT_ENV_VAR};

/// Returns the content root to load.
///
/// An explicit path wins, then the `DOCPACK_ROOT` environment variable, then
/// `content` relative to the working directory.
pub fn content_root(explicit: Option<&Path>) -> PathBuf {
  if let Some(path) = explicit {
    return path.to_path_buf();
  }

  std::env::var(ROOT_ENV_VAR)
    .ok()
    .filter(|value| !value.is_empty())
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_ROOT))
}
