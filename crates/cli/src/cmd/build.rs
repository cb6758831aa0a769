//! Implementation of the `docpack build` command.
//!
//! Builds are gated on validation: nothing is written while the selected
//! languages have blocking issues.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use docpack_lib::util::hash::Hashable;

use crate::cmd::load_catalog;
use crate::output::{plural, print_json, print_note, print_report, print_stat, print_success, symbols};

pub struct BuildArgs {
  pub language: Option<String>,
  pub out_dir: Option<PathBuf>,
  pub allow_warnings: bool,
}

pub fn cmd_build(root: &Path, args: &BuildArgs) -> Result<()> {
  let catalog = load_catalog(root)?;
  let language = args.language.as_deref();
  let selected = catalog.select(language)?;

  let report = catalog.validate_selected(language)?;
  print_report(&report);
  report
    .into_result(!args.allow_warnings)
    .context("Refusing to build")?;

  let Some(out_dir) = &args.out_dir else {
    let [loaded] = selected.as_slice() else {
      bail!(
        "{} selected; pass --language to print one, or --out-dir to write them all",
        plural(selected.len(), "language", "languages")
      );
    };
    print_json(&loaded.config)?;
    let hash = loaded.config.compute_hash().context("Failed to hash content")?;
    print_note(&format!("{} hash {}", loaded.config.id(), hash));
    return Ok(());
  };

  fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {}", out_dir.display()))?;

  for loaded in &selected {
    let config = &loaded.config;
    let path = out_dir.join(format!("{}.json", config.id()));
    let json = serde_json::to_string_pretty(config).context("Failed to serialize to JSON")?;
    fs::write(&path, json + "\n").with_context(|| format!("Failed to write {}", path.display()))?;

    let hash = config.compute_hash().context("Failed to hash content")?;
    info!(language = %config.id(), path = ?path, hash = %hash, "wrote language");

    print_success(&format!(
      "Built {} ({}) {} {}",
      config.id(),
      plural(config.entry_count(), "entry", "entries"),
      symbols::ARROW,
      path.display()
    ));
    print_stat("Hash", &hash.to_string());
  }

  Ok(())
}
