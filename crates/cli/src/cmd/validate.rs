//! Implementation of the `docpack validate` command.

use std::path::Path;

use anyhow::Result;

use crate::cmd::load_catalog;
use crate::output::{OutputFormat, plural, print_json, print_report, print_stat, print_success};

/// Execute the validate command.
///
/// Every issue is printed before the command fails, so a single run shows the
/// whole batch. Warnings only fail the run when `strict` is set.
pub fn cmd_validate(root: &Path, language: Option<&str>, strict: bool, output: OutputFormat) -> Result<()> {
  let catalog = load_catalog(root)?;
  let selected = catalog.select(language)?;
  let report = catalog.validate_selected(language)?;

  let ids: Vec<&str> = selected.iter().map(|l| l.config.id()).collect();
  let entries: usize = selected.iter().map(|l| l.config.entry_count()).sum();
  let warnings = report.warning_count();

  if output.is_json() {
    print_json(&serde_json::json!({
      "languages": ids,
      "entries": entries,
      "errors": report.error_count(),
      "warnings": warnings,
      "issues": report.issues,
    }))?;
    report.into_result(strict)?;
    return Ok(());
  }

  print_report(&report);
  report.into_result(strict)?;

  print_success(&format!(
    "Validated {} ({})",
    plural(ids.len(), "language", "languages"),
    plural(entries, "entry", "entries")
  ));
  print_stat("Languages", &ids.join(", "));
  if warnings > 0 {
    print_stat("Warnings", &warnings.to_string());
  }

  Ok(())
}
