//! Stats, show and cheatsheet integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn stats_counts_content() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "more.yaml"]);

  env
    .docpack_cmd()
    .arg("stats")
    .assert()
    .success()
    .stdout(predicate::str::contains("CPP (cpp)"))
    .stdout(predicate::str::contains("Partitions: 2"))
    .stdout(predicate::str::contains("Entries: 2"))
    .stdout(predicate::str::contains("Diagrams: 1"))
    .stdout(predicate::str::contains("beginner 1, intermediate 1"));
}

#[test]
fn stats_json_and_verbose() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "more.yaml"]);

  let output = env.docpack_cmd().args(["stats", "--output", "json"]).output().unwrap();
  assert!(output.status.success());
  let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value[0]["language"], "cpp");
  assert_eq!(value[0]["quizQuestions"], 1);
  assert_eq!(value[0]["crossLinked"], 1);

  env
    .docpack_cmd()
    .args(["stats", "--verbose"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Tags:"))
    .stdout(predicate::str::contains("array (1)"));
}

#[test]
fn show_prints_entry_and_equivalents() {
  let env = TestEnv::with_language("cpp", &["clean.yaml"]);
  env.add_language("python", &["clean.yaml"]);

  env
    .docpack_cmd()
    .args(["show", "hello", "--language", "cpp"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Hello, World"))
    .stdout(predicate::str::contains("Category: Basics"))
    .stdout(predicate::str::contains("(3 lines of code)"))
    .stdout(predicate::str::contains("Also in: python/hello"));
}

#[test]
fn show_json_and_missing_entry() {
  let env = TestEnv::with_language("cpp", &["more.yaml"]);

  env
    .docpack_cmd()
    .args(["show", "arrays", "--language", "cpp", "--output", "json"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"cheatSheetSummary\": \"int a[3];\""));

  env
    .docpack_cmd()
    .args(["show", "nope", "--language", "cpp"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No entry `nope` in language `cpp`"));
}

#[test]
fn cheatsheet_groups_by_category() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "more.yaml"]);

  env
    .docpack_cmd()
    .args(["cheatsheet", "--language", "cpp"])
    .assert()
    .success()
    .stdout(predicate::str::contains("CPP cheat sheet"))
    .stdout(predicate::str::contains("Basics"))
    .stdout(predicate::str::contains("Print a line"))
    .stdout(predicate::str::contains("int a[3];"));
}
