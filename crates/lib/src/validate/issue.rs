//! Validation findings.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// How bad a finding is.
///
/// Errors block a build. Warnings are reported and only block in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Warning,
  Error,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Severity::Warning => f.write_str("warning"),
      Severity::Error => f.write_str("error"),
    }
  }
}

/// Where in the content tree a finding applies.
///
/// Rendered as `language/partition/category/entry` followed by a section or
/// question index when present, e.g. `cpp/part1/oop/classes#section[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
  pub language: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub partition: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entry: Option<String>,
  /// 0-based section index.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub section: Option<usize>,
  /// 0-based quiz question index.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub question: Option<usize>,
}

impl Location {
  pub fn language(language: &str) -> Self {
    Self {
      language: language.to_string(),
      ..Self::default()
    }
  }

  pub fn with_partition(mut self, partition: Option<&str>) -> Self {
    self.partition = partition.map(str::to_string);
    self
  }

  pub fn with_category(mut self, category: &str) -> Self {
    self.category = Some(category.to_string());
    self
  }

  pub fn with_entry(mut self, entry: &str) -> Self {
    self.entry = Some(entry.to_string());
    self
  }

  pub fn with_section(mut self, index: usize) -> Self {
    self.section = Some(index);
    self
  }

  pub fn with_question(mut self, index: usize) -> Self {
    self.question = Some(index);
    self
  }

  /// The most specific id this location names.
  pub fn leaf_id(&self) -> &str {
    self
      .entry
      .as_deref()
      .or(self.category.as_deref())
      .unwrap_or(&self.language)
  }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.language)?;
    for part in [&self.partition, &self.category, &self.entry].into_iter().flatten() {
      write!(f, "/{part}")?;
    }
    if let Some(section) = self.section {
      write!(f, "#section[{section}]")?;
    }
    if let Some(question) = self.question {
      write!(f, "#quiz[{question}]")?;
    }
    Ok(())
  }
}

fn join_locations(locations: &[Location]) -> String {
  locations.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// What is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum IssueKind {
  #[error("duplicate entry id `{id}` at {}", join_locations(.locations))]
  DuplicateEntryId { id: String, locations: Vec<Location> },

  #[error("duplicate category id `{id}` at {}", join_locations(.locations))]
  DuplicateCategoryId { id: String, locations: Vec<Location> },

  #[error("correctIndex {index} is out of bounds for {options} option(s)")]
  CorrectIndexOutOfBounds { index: usize, options: usize },

  #[error("highlighted line {line} is out of range (code has {line_count} line(s))")]
  HighlightLineOutOfRange { line: u32, line_count: usize },

  #[error("crossLanguageId `{cross_language_id}` has no counterpart in another language")]
  DanglingCrossLanguageId { cross_language_id: String },

  #[error("{diagram} diagram {field} index {index} is out of range (length {len})")]
  DiagramIndexOutOfRange {
    diagram: String,
    field: String,
    index: usize,
    len: usize,
  },

  #[error("memory-layout pointer refers to unknown cell `{cell}`")]
  UnknownPointerTarget { cell: String },

  #[error("required field `{field}` is empty")]
  EmptyField { field: String },

  #[error("quiz option `{option}` appears more than once")]
  DuplicateQuizOption { option: String },

  #[error("tag `{tag}` appears more than once")]
  DuplicateTag { tag: String },

  #[error("entry has no sections")]
  NoSections,

  #[error("mermaid diagram has no code")]
  EmptyMermaid,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
  pub severity: Severity,
  pub location: Location,
  #[serde(flatten)]
  pub kind: IssueKind,
  /// Rendered message, for machine consumers that don't want to rebuild it.
  pub message: String,
}

impl Issue {
  pub fn new(severity: Severity, location: Location, kind: IssueKind) -> Self {
    let message = kind.to_string();
    Self {
      severity,
      location,
      kind,
      message,
    }
  }

  pub fn error(location: Location, kind: IssueKind) -> Self {
    Self::new(Severity::Error, location, kind)
  }

  pub fn warning(location: Location, kind: IssueKind) -> Self {
    Self::new(Severity::Warning, location, kind)
  }
}

impl fmt::Display for Issue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}: {}", self.severity, self.location, self.message)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn location_renders_path_and_indices() {
    let location = Location::language("cpp")
      .with_partition(Some("part1"))
      .with_category("oop")
      .with_entry("classes")
      .with_section(2);
    assert_eq!(location.to_string(), "cpp/part1/oop/classes#section[2]");

    let location = Location::language("cpp").with_category("oop").with_entry("classes").with_question(0);
    assert_eq!(location.to_string(), "cpp/oop/classes#quiz[0]");
  }

  #[test]
  fn leaf_id_prefers_entry() {
    let location = Location::language("cpp").with_category("oop");
    assert_eq!(location.leaf_id(), "oop");
    assert_eq!(location.with_entry("classes").leaf_id(), "classes");
    assert_eq!(Location::language("cpp").leaf_id(), "cpp");
  }

  #[test]
  fn duplicate_message_lists_every_location() {
    let kind = IssueKind::DuplicateEntryId {
      id: "classes".to_string(),
      locations: vec![
        Location::language("cpp").with_partition(Some("part1")).with_category("oop"),
        Location::language("cpp").with_partition(Some("part3")).with_category("advanced"),
      ],
    };
    assert_eq!(
      kind.to_string(),
      "duplicate entry id `classes` at cpp/part1/oop, cpp/part3/advanced"
    );
  }

  #[test]
  fn issue_serializes_kind_inline() {
    let issue = Issue::error(
      Location::language("cpp").with_entry("classes"),
      IssueKind::CorrectIndexOutOfBounds { index: 4, options: 4 },
    );

    let json = serde_json::to_value(&issue).unwrap();
    assert_eq!(json["severity"], "error");
    assert_eq!(json["kind"], "correct-index-out-of-bounds");
    assert_eq!(json["index"], 4);
    assert_eq!(json["location"]["entry"], "classes");
    assert!(json["message"].as_str().unwrap().contains("out of bounds"));
  }

  #[test]
  fn severity_orders_errors_last() {
    assert!(Severity::Error > Severity::Warning);
  }
}
