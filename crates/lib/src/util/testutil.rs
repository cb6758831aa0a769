//! Test utilities for docpack-lib.
//!
//! Builders for small in-memory languages used across unit tests.

use crate::schema::{DocCategory, DocEntry, DocSection, Difficulty, LanguageMeta, QuizQuestion};

pub fn meta(id: &str) -> LanguageMeta {
  LanguageMeta {
    id: id.to_string(),
    label: id.to_uppercase(),
    icon: id.to_string(),
    color: "#000000".to_string(),
    official_url: format!("https://{id}.example.org"),
    tagline: format!("{id} tagline"),
    playground_url: format!("https://play.{id}.example.org"),
    execution_api_id: id.to_string(),
  }
}

pub fn section(code: &str) -> DocSection {
  DocSection {
    heading: "Example".to_string(),
    content: "Explanation.".to_string(),
    code: code.to_string(),
    output: String::new(),
    tip: None,
    warning: None,
    note: None,
    analogy: None,
    code_highlight_lines: None,
    diagram: None,
  }
}

pub fn question(options: &[&str], correct_index: usize) -> QuizQuestion {
  QuizQuestion {
    question: "Which one?".to_string(),
    options: options.iter().map(|o| o.to_string()).collect(),
    correct_index,
    explanation: "Because.".to_string(),
  }
}

pub fn entry(id: &str) -> DocEntry {
  DocEntry {
    id: id.to_string(),
    title: id.replace('-', " "),
    difficulty: Difficulty::Beginner,
    tags: vec![],
    cross_language_id: None,
    cheat_sheet_summary: format!("{id} summary"),
    signature: None,
    sections: vec![section("int main() {}")],
    quiz: None,
    challenge: None,
  }
}

pub fn category(id: &str, entries: Vec<DocEntry>) -> DocCategory {
  DocCategory {
    id: id.to_string(),
    label: id.to_uppercase(),
    icon: "book".to_string(),
    entries,
  }
}
