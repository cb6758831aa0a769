//! Validate command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn validate_clean_language() {
  let env = TestEnv::with_language("cpp", &["more.yaml"]);

  env
    .docpack_cmd()
    .arg("validate")
    .arg("--strict")
    .assert()
    .success()
    .stdout(predicate::str::contains("Validated 1 language (1 entry)"));
}

#[test]
fn single_language_link_is_only_a_warning() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "more.yaml"]);

  env
    .docpack_cmd()
    .arg("validate")
    .assert()
    .success()
    .stdout(predicate::str::contains("Validated 1 language (2 entries)"))
    .stderr(predicate::str::contains("crossLanguageId `hello-world`"));
}

#[test]
fn validate_reports_duplicates_across_partitions() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "duplicate_ids.yaml"]);

  env
    .docpack_cmd()
    .arg("validate")
    .assert()
    .failure()
    .stderr(predicate::str::contains("duplicate entry id `hello`"))
    .stderr(predicate::str::contains("cpp/clean/basics/hello"))
    .stderr(predicate::str::contains("cpp/duplicate_ids/extra/hello"))
    .stderr(predicate::str::contains("blocking issue"));
}

#[test]
fn validate_collects_every_broken_reference() {
  let env = TestEnv::with_language("cpp", &["broken_refs.yaml"]);

  env
    .docpack_cmd()
    .arg("validate")
    .arg("--output")
    .arg("json")
    .assert()
    .failure()
    .stdout(predicate::str::contains("\"errors\": 2"))
    .stdout(predicate::str::contains("correct-index-out-of-bounds"))
    .stdout(predicate::str::contains("highlight-line-out-of-range"));
}

#[test]
fn warnings_pass_unless_strict() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "warnings.yaml"]);

  env
    .docpack_cmd()
    .arg("validate")
    .assert()
    .success()
    .stderr(predicate::str::contains("warning"));

  env
    .docpack_cmd()
    .arg("validate")
    .arg("--strict")
    .assert()
    .failure()
    .stderr(predicate::str::contains("draft"));
}

#[test]
fn dangling_link_is_an_error_with_two_languages() {
  let env = TestEnv::with_language("cpp", &["clean.yaml"]);
  env.add_language("go", &["more.yaml"]);

  env
    .docpack_cmd()
    .arg("validate")
    .assert()
    .failure()
    .stderr(predicate::str::contains("hello-world"));

  // Filtering to the language without links leaves nothing to report.
  env
    .docpack_cmd()
    .args(["validate", "--language", "go"])
    .assert()
    .success();
}

#[test]
fn validate_unknown_language_fails() {
  let env = TestEnv::with_language("cpp", &["clean.yaml"]);

  env
    .docpack_cmd()
    .args(["validate", "--language", "rust"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown language `rust` (available: cpp)"));
}

#[test]
fn validate_empty_root_fails() {
  let env = TestEnv::empty();

  env
    .docpack_cmd()
    .arg("validate")
    .assert()
    .failure()
    .stderr(predicate::str::contains("no language manifests found"));
}
