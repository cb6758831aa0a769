//! Show command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use docpack_lib::index::EntryIndex;

use crate::cmd::load_catalog;
use crate::output::{OutputFormat, plural, print_json, print_stat, symbols};

pub fn cmd_show(root: &Path, language: &str, entry_id: &str, output: OutputFormat) -> Result<()> {
  let catalog = load_catalog(root)?;
  let loaded = catalog.language(language)?;
  let index = EntryIndex::new(&loaded.config);
  let (category, entry) = index
    .get(entry_id)
    .with_context(|| format!("No entry `{entry_id}` in language `{language}`"))?;

  if output.is_json() {
    return print_json(entry);
  }

  println!("{}", entry.title.if_supports_color(Stream::Stdout, |s| s.bold()));
  print_stat("Id", &entry.id);
  print_stat("Category", &category.label);
  print_stat("Difficulty", entry.difficulty.as_str());
  if !entry.tags.is_empty() {
    print_stat("Tags", &entry.tags.join(", "));
  }
  if let Some(signature) = &entry.signature {
    print_stat("Signature", signature);
  }
  print_stat("Summary", &entry.cheat_sheet_summary);

  println!();
  println!("Sections:");
  for (i, section) in entry.sections.iter().enumerate() {
    let lines = plural(section.code_line_count(), "line", "lines");
    println!(
      "  {} {}. {} {}",
      symbols::INFO,
      i + 1,
      section.heading,
      format!("({lines} of code)").if_supports_color(Stream::Stdout, |s| s.dimmed())
    );
    if let Some(diagram) = &section.diagram {
      match diagram.caption() {
        Some(caption) => println!("      {} {} diagram: {}", symbols::ARROW, diagram.type_name(), caption),
        None => println!("      {} {} diagram", symbols::ARROW, diagram.type_name()),
      }
    }
  }

  println!();
  print_stat("Quiz", &plural(entry.quiz_questions().len(), "question", "questions"));
  print_stat("Challenge", if entry.challenge.is_some() { "yes" } else { "no" });

  if let Some(cross_id) = &entry.cross_language_id {
    let others: Vec<String> = catalog
      .equivalents(cross_id)
      .iter()
      .filter(|e| e.language.id() != language)
      .map(|e| format!("{}/{}", e.language.id(), e.entry.id))
      .collect();
    if !others.is_empty() {
      print_stat("Also in", &others.join(", "));
    }
  }

  Ok(())
}
