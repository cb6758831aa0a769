mod build;
mod cheatsheet;
mod init;
mod show;
mod stats;
mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use docpack_lib::catalog::Catalog;

pub use build::{BuildArgs, cmd_build};
pub use cheatsheet::cmd_cheatsheet;
pub use init::cmd_init;
pub use show::cmd_show;
pub use stats::cmd_stats;
pub use validate::cmd_validate;

/// Load every language under the content root.
fn load_catalog(root: &Path) -> Result<Catalog> {
  Catalog::load(root).with_context(|| format!("Failed to load content from {}", root.display()))
}
