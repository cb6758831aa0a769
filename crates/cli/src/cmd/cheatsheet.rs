//! Cheatsheet command implementation.

use std::path::Path;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use docpack_lib::index::cheat_sheet;

use crate::cmd::load_catalog;
use crate::output::symbols;

/// Print one line group per entry, grouped under category headings.
pub fn cmd_cheatsheet(root: &Path, language: &str) -> Result<()> {
  let catalog = load_catalog(root)?;
  let loaded = catalog.language(language)?;

  println!(
    "{}",
    format!("{} cheat sheet", loaded.config.meta.label).if_supports_color(Stream::Stdout, |s| s.bold())
  );

  let mut current = None;
  for row in cheat_sheet(&loaded.config) {
    if current != Some(row.category) {
      println!();
      println!("{}", row.category.if_supports_color(Stream::Stdout, |s| s.cyan()));
      current = Some(row.category);
    }
    println!("  {} {}", symbols::ARROW, row.title);
    if let Some(signature) = row.signature {
      println!("      {}", signature.if_supports_color(Stream::Stdout, |s| s.dimmed()));
    }
    println!("      {}", row.summary);
  }

  Ok(())
}
