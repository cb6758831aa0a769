//! Tests over the content shipped in the repository's `content/` directory.

use std::path::PathBuf;

use docpack_lib::catalog::Catalog;
use docpack_lib::index::{EntryIndex, Stats, cheat_sheet};
use docpack_lib::schema::Difficulty;
use docpack_lib::util::hash::Hashable;

fn shipped() -> Catalog {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../content");
  Catalog::load(&root).unwrap_or_else(|e| panic!("shipped content should load: {e}"))
}

#[test]
fn shipped_content_is_clean() {
  let report = shipped().validate();
  assert!(report.is_clean(), "unexpected issues:\n{:#?}", report.issues);
}

#[test]
fn cpp_partitions_assemble_in_manifest_order() {
  let catalog = shipped();
  let cpp = catalog.language("cpp").unwrap();

  let partitions: Vec<_> = cpp.provenance.spans().iter().map(|s| s.partition.as_str()).collect();
  assert_eq!(partitions, vec!["part1", "part2", "part3", "part4"]);

  let categories: Vec<_> = cpp.config.categories.iter().map(|c| c.id.as_str()).collect();
  assert_eq!(
    categories,
    vec!["oop", "memory", "templates", "stl-containers", "errors", "concurrency"]
  );
}

#[test]
fn every_cross_language_id_has_a_python_counterpart() {
  let catalog = shipped();
  let cpp = catalog.language("cpp").unwrap();

  for (_, entry) in cpp.config.entries() {
    let Some(cross_id) = entry.cross_language_id.as_deref() else {
      continue;
    };
    let languages: Vec<_> = catalog.equivalents(cross_id).iter().map(|e| e.language.id()).collect();
    assert!(languages.contains(&"python"), "{cross_id} has no python entry");
  }
}

#[test]
fn shipped_content_hash_is_stable() {
  let first = shipped();
  let second = shipped();

  for (a, b) in first.configs().zip(second.configs()) {
    assert_eq!(a.compute_hash().unwrap(), b.compute_hash().unwrap());
  }
}

#[test]
fn indexes_cover_every_entry() {
  let catalog = shipped();
  let cpp = &catalog.language("cpp").unwrap().config;

  let index = EntryIndex::new(cpp);
  let stats = Stats::of(cpp);
  assert_eq!(index.len(), stats.entries);
  assert_eq!(cheat_sheet(cpp).len(), stats.entries);
  assert!(index.get("smart-pointers").is_some());
  assert!(!index.with_difficulty(Difficulty::Advanced).is_empty());
  assert!(!index.with_tag("stl").is_empty());
}
