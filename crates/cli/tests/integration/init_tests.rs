//! Init command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn init_defaults_to_a_directory_under_the_root() {
  let env = TestEnv::empty();

  env
    .docpack_cmd()
    .args(["init", "--language", "rust", "--label", "Rust"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Initialized language `rust`!"));

  assert!(env.root_path().join("rust").join("language.yaml").exists());
  assert!(env.root_path().join("rust").join("part1.yaml").exists());
}

#[test]
fn init_then_validate_and_build() {
  let env = TestEnv::empty();
  let out = env.output_path();

  env.docpack_cmd().args(["init", "--language", "go"]).assert().success();

  env
    .docpack_cmd()
    .args(["validate", "--strict"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Validated 1 language (1 entry)"));

  env.docpack_cmd().arg("build").arg("--out-dir").arg(&out).assert().success();
  assert!(out.join("go.json").exists());
}

#[test]
fn init_into_explicit_path() {
  let env = TestEnv::empty();
  let dir = env.temp.path().join("elsewhere").join("kotlin");

  env
    .docpack_cmd()
    .arg("init")
    .arg(&dir)
    .args(["--language", "kotlin"])
    .assert()
    .success();

  assert!(dir.join("language.yaml").exists());
}

#[test]
fn init_refuses_to_overwrite() {
  let env = TestEnv::with_language("cpp", &["clean.yaml"]);

  env
    .docpack_cmd()
    .args(["init", "--language", "cpp"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_rejects_bad_ids() {
  let env = TestEnv::empty();

  env
    .docpack_cmd()
    .args(["init", "--language", "C++"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid language id"));
}
