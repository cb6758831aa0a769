//! Stats command implementation.
//!
//! Displays content counts per language, plus tags and diagram types in
//! verbose mode.

use std::path::Path;

use anyhow::Result;

use docpack_lib::index::{EntryIndex, Stats, diagram_kinds};

use crate::cmd::load_catalog;
use crate::output::{OutputFormat, print_json, print_stat, print_success, symbols};

pub fn cmd_stats(root: &Path, language: Option<&str>, output: OutputFormat, verbose: bool) -> Result<()> {
  let catalog = load_catalog(root)?;
  let selected = catalog.select(language)?;
  let stats: Vec<Stats> = selected.iter().map(|l| Stats::of(&l.config)).collect();

  if output.is_json() {
    return print_json(&stats);
  }

  for (loaded, stats) in selected.iter().zip(&stats) {
    print_success(&format!("{} ({})", loaded.config.meta.label, stats.language));
    print_stat("Partitions", &loaded.provenance.spans().len().to_string());
    print_stat("Categories", &stats.categories.to_string());
    print_stat("Entries", &stats.entries.to_string());
    print_stat("Sections", &stats.sections.to_string());
    print_stat("Quiz questions", &stats.quiz_questions.to_string());
    print_stat("Challenges", &stats.challenges.to_string());
    print_stat("Diagrams", &stats.diagrams.to_string());
    print_stat("Cross-linked", &stats.cross_linked.to_string());

    let difficulty: Vec<String> = stats
      .by_difficulty
      .iter()
      .map(|(level, count)| format!("{level} {count}"))
      .collect();
    print_stat("Difficulty", &difficulty.join(", "));

    if verbose {
      println!();
      println!("Diagram types:");
      for (kind, count) in diagram_kinds(&loaded.config) {
        println!("  {} {} ({})", symbols::INFO, kind, count);
      }

      println!();
      println!("Tags:");
      for (tag, count) in EntryIndex::new(&loaded.config).tags() {
        println!("  {} {} ({})", symbols::INFO, tag, count);
      }
    }

    println!();
  }

  Ok(())
}
