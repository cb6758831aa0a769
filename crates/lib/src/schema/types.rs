//! Entry, category and language records.
//!
//! Field names follow the frontend contract (camelCase on the wire). Every
//! record rejects unknown fields so a typo in a content file fails at load
//! time instead of silently dropping content.
//!
//! # Example
//!
//! ```yaml
//! id: classes
//! title: Classes & Objects
//! difficulty: beginner
//! tags: [oop, class]
//! crossLanguageId: classes
//! cheatSheetSummary: "class Name { public: ... };"
//! sections:
//!   - heading: Defining a class
//!     content: A class bundles data and behavior.
//!     code: |
//!       #include <iostream>
//!       int main() { std::cout << "hi\n"; }
//!     output: hi
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Diagram;
use crate::util::hash::Hashable;

/// How hard an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Beginner,
  Intermediate,
  Advanced,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

  pub fn as_str(self) -> &'static str {
    match self {
      Difficulty::Beginner => "beginner",
      Difficulty::Intermediate => "intermediate",
      Difficulty::Advanced => "advanced",
    }
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One documentation topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocEntry {
  /// Slug, unique within a language.
  pub id: String,
  pub title: String,
  pub difficulty: Difficulty,
  #[serde(default)]
  pub tags: Vec<String>,
  /// Key shared by equivalent entries in other languages.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cross_language_id: Option<String>,
  pub cheat_sheet_summary: String,
  /// Canonical declaration, e.g. `template <typename T> class vector;`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub signature: Option<String>,
  #[serde(default)]
  pub sections: Vec<DocSection>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub quiz: Option<Vec<QuizQuestion>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub challenge: Option<Challenge>,
}

impl DocEntry {
  /// Quiz questions, empty when the entry has no quiz.
  pub fn quiz_questions(&self) -> &[QuizQuestion] {
    self.quiz.as_deref().unwrap_or_default()
  }
}

/// One explanatory block of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocSection {
  pub heading: String,
  pub content: String,
  #[serde(default)]
  pub code: String,
  /// Expected program output as plain text. Never checked against a compiler.
  #[serde(default)]
  pub output: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tip: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub warning: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub note: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub analogy: Option<String>,
  /// 1-based line numbers of `code` to emphasize.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code_highlight_lines: Option<Vec<u32>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub diagram: Option<Diagram>,
}

impl DocSection {
  /// Number of lines in `code`, as the frontend numbers them.
  pub fn code_line_count(&self) -> usize {
    self.code.lines().count()
  }
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
  pub question: String,
  pub options: Vec<String>,
  /// Index into `options`.
  pub correct_index: usize,
  pub explanation: String,
}

impl QuizQuestion {
  /// The correct option, or `None` if `correct_index` is out of bounds.
  pub fn correct_option(&self) -> Option<&str> {
    self.options.get(self.correct_index).map(String::as_str)
  }
}

/// A coding exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Challenge {
  pub prompt: String,
  pub starter_code: String,
  pub solution_code: String,
  /// Progressively revealing hints, in display order.
  #[serde(default)]
  pub hints: Vec<String>,
}

/// A named, ordered group of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocCategory {
  pub id: String,
  pub label: String,
  /// Name of a UI icon.
  pub icon: String,
  #[serde(default)]
  pub entries: Vec<DocEntry>,
}

/// Language-level metadata.
///
/// Shared by the language manifest on disk and the assembled
/// [`LanguageConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageMeta {
  pub id: String,
  pub label: String,
  pub icon: String,
  /// Hex color, e.g. `#00599C`.
  pub color: String,
  pub official_url: String,
  pub tagline: String,
  pub playground_url: String,
  /// Opaque key the frontend uses to route snippets to an execution backend.
  pub execution_api_id: String,
}

/// Everything the frontend needs for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
  #[serde(flatten)]
  pub meta: LanguageMeta,
  pub categories: Vec<DocCategory>,
}

impl LanguageConfig {
  pub fn id(&self) -> &str {
    &self.meta.id
  }

  /// All entries in display order, paired with their category.
  pub fn entries(&self) -> impl Iterator<Item = (&DocCategory, &DocEntry)> {
    self
      .categories
      .iter()
      .flat_map(|category| category.entries.iter().map(move |entry| (category, entry)))
  }

  pub fn entry_count(&self) -> usize {
    self.categories.iter().map(|c| c.entries.len()).sum()
  }
}

impl Hashable for LanguageConfig {}
