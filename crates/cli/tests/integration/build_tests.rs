//! Build command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn build_writes_one_json_file_per_language() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "more.yaml"]);
  env.add_language("python", &["clean.yaml"]);
  let out = env.output_path();

  env
    .docpack_cmd()
    .arg("build")
    .arg("--out-dir")
    .arg(&out)
    .assert()
    .success()
    .stdout(predicate::str::contains("Built cpp (2 entries)"))
    .stdout(predicate::str::contains("Hash"));

  let json = std::fs::read_to_string(out.join("cpp.json")).unwrap();
  let value: serde_json::Value = serde_json::from_str(&json).unwrap();
  assert_eq!(value["id"], "cpp");
  assert_eq!(value["categories"].as_array().unwrap().len(), 2);
  assert_eq!(value["categories"][0]["entries"][0]["crossLanguageId"], "hello-world");
  assert_eq!(value["categories"][1]["entries"][0]["sections"][0]["diagram"]["type"], "array");
  assert!(out.join("python.json").exists());
}

#[test]
fn build_is_deterministic() {
  let env = TestEnv::with_language("cpp", &["more.yaml"]);
  let out = env.output_path();

  env.docpack_cmd().arg("build").arg("--out-dir").arg(&out).assert().success();
  let first = std::fs::read_to_string(out.join("cpp.json")).unwrap();

  env.docpack_cmd().arg("build").arg("--out-dir").arg(&out).assert().success();
  let second = std::fs::read_to_string(out.join("cpp.json")).unwrap();

  assert_eq!(first, second);
}

#[test]
fn build_prints_single_language_to_stdout() {
  let env = TestEnv::with_language("cpp", &["more.yaml"]);

  env
    .docpack_cmd()
    .args(["build", "--language", "cpp"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"executionApiId\": \"cpp\""))
    .stderr(predicate::str::contains("cpp hash"));
}

#[test]
fn build_refuses_invalid_content() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "duplicate_ids.yaml"]);
  let out = env.output_path();

  env
    .docpack_cmd()
    .arg("build")
    .arg("--out-dir")
    .arg(&out)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Refusing to build"))
    .stderr(predicate::str::contains("hello"));

  assert!(!out.join("cpp.json").exists());
}

#[test]
fn build_warnings_need_opt_in() {
  let env = TestEnv::with_language("cpp", &["clean.yaml", "warnings.yaml"]);
  let out = env.output_path();

  env.docpack_cmd().arg("build").arg("--out-dir").arg(&out).assert().failure();

  env
    .docpack_cmd()
    .arg("build")
    .arg("--out-dir")
    .arg(&out)
    .arg("--allow-warnings")
    .assert()
    .success();
  assert!(out.join("cpp.json").exists());
}

#[test]
fn build_to_stdout_needs_one_language() {
  let env = TestEnv::with_language("cpp", &["clean.yaml"]);
  env.add_language("python", &["clean.yaml"]);

  env
    .docpack_cmd()
    .arg("build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("2 languages selected"));
}
