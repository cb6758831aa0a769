//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own content root inside a temporary directory.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an empty test environment.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Create a content root with one language built from fixture partitions.
  pub fn with_language(id: &str, partitions: &[&str]) -> Self {
    let env = Self::empty();
    env.add_language(id, partitions);
    env
  }

  /// Add a language whose manifest lists the given fixtures, in order.
  pub fn add_language(&self, id: &str, partitions: &[&str]) {
    self.write_file(&format!("content/{id}/language.yaml"), &manifest(id, partitions));
    for name in partitions {
      self.write_file(&format!("content/{id}/{name}"), &fixture_content(name));
    }
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  /// Content root (isolated per test).
  pub fn root_path(&self) -> PathBuf {
    let p = self.temp.path().join("content");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Output path for build artifacts.
  pub fn output_path(&self) -> PathBuf {
    self.temp.path().join("dist")
  }

  /// Get a pre-configured Command for the docpack binary.
  ///
  /// Points `DOCPACK_ROOT` at the isolated content root and runs from the
  /// temp directory so the default `content` root is never the repo's.
  pub fn docpack_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("docpack");
    cmd.env("DOCPACK_ROOT", self.root_path());
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(self.temp.path());
    cmd
  }
}

fn manifest(id: &str, partitions: &[&str]) -> String {
  format!(
    r##"id: {id}
label: {label}
icon: {id}
color: "#336699"
officialUrl: https://{id}.example.org
tagline: Test language
playgroundUrl: https://play.{id}.example.org
executionApiId: {id}
partitions: [{list}]
"##,
    label = id.to_uppercase(),
    list = partitions.join(", ")
  )
}
