//! Implementation of the `docpack init` command.
//!
//! Scaffolds a language directory with a manifest and a first partition that
//! already passes validation.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use docpack_lib::init::{InitOptions, init};

use crate::output::symbols;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the id is not a slug, the files already exist, or
/// there are permission issues.
pub fn cmd_init(path: &Path, language: &str, label: Option<String>) -> Result<()> {
  let options = InitOptions {
    language_dir: path.to_path_buf(),
    id: language.to_string(),
    label,
  };

  let result = init(&options).context("Failed to initialize language")?;

  println!(
    "{} {}",
    symbols::SUCCESS.green(),
    format!("Initialized language `{language}`!").green().bold()
  );
  println!();
  println!(
    "  {} Language directory: {}",
    symbols::INFO.cyan(),
    result.language_dir.display()
  );
  println!("  {} Manifest:           {}", symbols::INFO.cyan(), result.manifest.display());
  println!("  {} First partition:    {}", symbols::INFO.cyan(), result.partition.display());
  println!();
  println!("{}", "Next steps:".bold());
  println!(
    "  1. Edit {} to add categories and entries",
    result.partition.display().to_string().cyan()
  );
  println!("  2. Run: {}", format!("docpack validate --language {language}").cyan());

  Ok(())
}
