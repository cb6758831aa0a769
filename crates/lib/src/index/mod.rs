//! Lookups and summaries over an assembled language.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::schema::{Difficulty, DocCategory, DocEntry, LanguageConfig};

/// Id, tag and difficulty lookups over one language, in display order.
#[derive(Debug)]
pub struct EntryIndex<'a> {
  ordered: Vec<(&'a DocCategory, &'a DocEntry)>,
  by_id: HashMap<&'a str, usize>,
  by_tag: BTreeMap<&'a str, Vec<usize>>,
}

impl<'a> EntryIndex<'a> {
  /// Index every entry of `config`.
  ///
  /// When ids collide the first entry in display order wins; run the
  /// validator to catch collisions.
  pub fn new(config: &'a LanguageConfig) -> Self {
    let ordered: Vec<_> = config.entries().collect();
    let mut by_id = HashMap::new();
    let mut by_tag: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

    for (position, (_, entry)) in ordered.iter().enumerate() {
      by_id.entry(entry.id.as_str()).or_insert(position);
      for tag in &entry.tags {
        let positions = by_tag.entry(tag.as_str()).or_default();
        if positions.last() != Some(&position) {
          positions.push(position);
        }
      }
    }

    Self { ordered, by_id, by_tag }
  }

  pub fn len(&self) -> usize {
    self.ordered.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ordered.is_empty()
  }

  pub fn get(&self, id: &str) -> Option<(&'a DocCategory, &'a DocEntry)> {
    self.by_id.get(id).map(|&position| self.ordered[position])
  }

  pub fn with_tag(&self, tag: &str) -> Vec<(&'a DocCategory, &'a DocEntry)> {
    self
      .by_tag
      .get(tag)
      .map(|positions| positions.iter().map(|&p| self.ordered[p]).collect())
      .unwrap_or_default()
  }

  pub fn with_difficulty(&self, difficulty: Difficulty) -> Vec<(&'a DocCategory, &'a DocEntry)> {
    self
      .ordered
      .iter()
      .copied()
      .filter(|(_, entry)| entry.difficulty == difficulty)
      .collect()
  }

  /// All tags with their entry counts, alphabetically.
  pub fn tags(&self) -> Vec<(&'a str, usize)> {
    self.by_tag.iter().map(|(tag, positions)| (*tag, positions.len())).collect()
  }
}

/// Content counts for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
  pub language: String,
  pub categories: usize,
  pub entries: usize,
  pub sections: usize,
  pub quiz_questions: usize,
  pub challenges: usize,
  pub diagrams: usize,
  pub cross_linked: usize,
  pub by_difficulty: BTreeMap<Difficulty, usize>,
}

impl Stats {
  pub fn of(config: &LanguageConfig) -> Self {
    let mut stats = Stats {
      language: config.id().to_string(),
      categories: config.categories.len(),
      ..Stats::default()
    };

    for (_, entry) in config.entries() {
      stats.entries += 1;
      stats.sections += entry.sections.len();
      stats.quiz_questions += entry.quiz_questions().len();
      stats.challenges += usize::from(entry.challenge.is_some());
      stats.diagrams += entry.sections.iter().filter(|s| s.diagram.is_some()).count();
      stats.cross_linked += usize::from(entry.cross_language_id.is_some());
      *stats.by_difficulty.entry(entry.difficulty).or_default() += 1;
    }

    stats
  }
}

/// One row of a language's cheat sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheatSheetRow<'a> {
  pub category: &'a str,
  pub entry_id: &'a str,
  pub title: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub signature: Option<&'a str>,
  pub summary: &'a str,
}

/// Compact reference rows for every entry, in display order.
pub fn cheat_sheet(config: &LanguageConfig) -> Vec<CheatSheetRow<'_>> {
  config
    .entries()
    .map(|(category, entry)| CheatSheetRow {
      category: &category.label,
      entry_id: &entry.id,
      title: &entry.title,
      signature: entry.signature.as_deref(),
      summary: &entry.cheat_sheet_summary,
    })
    .collect()
}

/// Mermaid and custom diagram counts, keyed by diagram kind or custom type.
pub fn diagram_kinds(config: &LanguageConfig) -> BTreeMap<&'static str, usize> {
  let mut kinds = BTreeMap::new();
  for (_, entry) in config.entries() {
    for diagram in entry.sections.iter().filter_map(|s| s.diagram.as_ref()) {
      *kinds.entry(diagram.type_name()).or_default() += 1;
    }
  }
  kinds
}
