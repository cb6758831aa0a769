//! Content validation.
//!
//! Assembly never checks anything, so this pass is where authoring mistakes
//! surface: colliding ids, quiz answers pointing past their options,
//! highlighted lines that don't exist, diagram indices out of range and
//! cross-language links that lead nowhere.
//!
//! Validation never stops at the first problem. Every finding is collected in
//! a [`Report`] so authors can fix a whole batch at once.

mod issue;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::aggregate::Provenance;
use crate::partition::Partition;
use crate::schema::{CustomDiagram, DocCategory, DocEntry, DocSection, Diagram, LanguageConfig};

pub use issue::{Issue, IssueKind, Location, Severity};

/// All findings of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Report {
  pub issues: Vec<Issue>,
}

/// Returned when a report holds blocking issues.
#[derive(Debug, Error)]
#[error("content validation failed with {count} blocking issue(s): {}", .ids.join(", "))]
pub struct ValidationError {
  pub count: usize,
  /// Offending ids (entry, category or language), in report order.
  pub ids: Vec<String>,
}

impl Report {
  pub fn push(&mut self, issue: Issue) {
    self.issues.push(issue);
  }

  pub fn merge(&mut self, other: Report) {
    self.issues.extend(other.issues);
  }

  pub fn errors(&self) -> impl Iterator<Item = &Issue> {
    self.issues.iter().filter(|i| i.severity == Severity::Error)
  }

  pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
    self.issues.iter().filter(|i| i.severity == Severity::Warning)
  }

  pub fn error_count(&self) -> usize {
    self.errors().count()
  }

  pub fn warning_count(&self) -> usize {
    self.warnings().count()
  }

  pub fn has_errors(&self) -> bool {
    self.errors().next().is_some()
  }

  pub fn is_clean(&self) -> bool {
    self.issues.is_empty()
  }

  /// Fail if any issue blocks: errors always, warnings too when `strict`.
  ///
  /// # Errors
  ///
  /// Returns a [`ValidationError`] naming every offending id.
  pub fn into_result(self, strict: bool) -> Result<Report, ValidationError> {
    let blocking: Vec<&Issue> = self
      .issues
      .iter()
      .filter(|i| strict || i.severity == Severity::Error)
      .collect();

    if blocking.is_empty() {
      return Ok(self);
    }

    let mut seen = HashSet::new();
    let ids = blocking
      .iter()
      .map(|i| i.location.leaf_id().to_string())
      .filter(|id| seen.insert(id.clone()))
      .collect();

    Err(ValidationError {
      count: blocking.len(),
      ids,
    })
  }
}

/// Validate one assembled language.
///
/// `provenance`, when given, lets findings name the partition that declared
/// the offending category.
pub fn validate_language(config: &LanguageConfig, provenance: Option<&Provenance>) -> Report {
  let mut report = Report::default();

  if config.meta.id.trim().is_empty() {
    report.push(Issue::error(
      Location::language(&config.meta.id),
      IssueKind::EmptyField { field: "id".to_string() },
    ));
  }

  let partition_of = |index: usize| provenance.and_then(|p| p.partition_of(index));
  report.merge(validate_categories(config.id(), &config.categories, partition_of));

  debug!(
    language = %config.id(),
    errors = report.error_count(),
    warnings = report.warning_count(),
    "validated language"
  );

  report
}

/// Validate a single partition in isolation.
///
/// Duplicate ids are only detected within the partition; collisions with
/// other partitions need [`validate_language`] on the assembled config.
pub fn validate_partition(language: &str, partition: &Partition) -> Report {
  validate_categories(language, &partition.categories, |_| Some(partition.name.as_str()))
}

fn validate_categories<'p>(
  language: &str,
  categories: &[DocCategory],
  partition_of: impl Fn(usize) -> Option<&'p str>,
) -> Report {
  let mut report = Report::default();
  let mut category_ids: BTreeMap<&str, Vec<Location>> = BTreeMap::new();
  let mut entry_ids: BTreeMap<&str, Vec<Location>> = BTreeMap::new();

  for (index, category) in categories.iter().enumerate() {
    let category_location = Location::language(language)
      .with_partition(partition_of(index))
      .with_category(&category.id);

    if category.id.trim().is_empty() {
      report.push(Issue::error(
        category_location.clone(),
        IssueKind::EmptyField { field: "category.id".to_string() },
      ));
    } else {
      category_ids
        .entry(category.id.as_str())
        .or_default()
        .push(category_location.clone());
    }

    for entry in &category.entries {
      let entry_location = category_location.clone().with_entry(&entry.id);

      if entry.id.trim().is_empty() {
        report.push(Issue::error(
          entry_location.clone(),
          IssueKind::EmptyField { field: "entry.id".to_string() },
        ));
      } else {
        entry_ids.entry(entry.id.as_str()).or_default().push(entry_location.clone());
      }

      validate_entry(entry, &entry_location, &mut report);
    }
  }

  for (id, locations) in category_ids.into_iter().filter(|(_, l)| l.len() > 1) {
    report.push(Issue::error(
      locations[0].clone(),
      IssueKind::DuplicateCategoryId {
        id: id.to_string(),
        locations,
      },
    ));
  }

  for (id, locations) in entry_ids.into_iter().filter(|(_, l)| l.len() > 1) {
    report.push(Issue::error(
      locations[0].clone(),
      IssueKind::DuplicateEntryId {
        id: id.to_string(),
        locations,
      },
    ));
  }

  report
}

fn validate_entry(entry: &DocEntry, location: &Location, report: &mut Report) {
  if entry.title.trim().is_empty() {
    report.push(Issue::error(
      location.clone(),
      IssueKind::EmptyField { field: "title".to_string() },
    ));
  }

  let mut tags = HashSet::new();
  for tag in &entry.tags {
    if !tags.insert(tag.as_str()) {
      report.push(Issue::warning(location.clone(), IssueKind::DuplicateTag { tag: tag.clone() }));
    }
  }

  if entry.sections.is_empty() {
    report.push(Issue::warning(location.clone(), IssueKind::NoSections));
  }

  for (index, section) in entry.sections.iter().enumerate() {
    validate_section(section, &location.clone().with_section(index), report);
  }

  for (index, question) in entry.quiz_questions().iter().enumerate() {
    let question_location = location.clone().with_question(index);

    if question.correct_index >= question.options.len() {
      report.push(Issue::error(
        question_location.clone(),
        IssueKind::CorrectIndexOutOfBounds {
          index: question.correct_index,
          options: question.options.len(),
        },
      ));
    }

    let mut options = HashSet::new();
    for option in &question.options {
      if !options.insert(option.as_str()) {
        report.push(Issue::warning(
          question_location.clone(),
          IssueKind::DuplicateQuizOption { option: option.clone() },
        ));
      }
    }
  }
}

fn validate_section(section: &DocSection, location: &Location, report: &mut Report) {
  if let Some(lines) = &section.code_highlight_lines {
    let line_count = section.code_line_count();
    for &line in lines {
      if line < 1 || line as usize > line_count {
        report.push(Issue::error(
          location.clone(),
          IssueKind::HighlightLineOutOfRange { line, line_count },
        ));
      }
    }
  }

  match &section.diagram {
    Some(Diagram::Mermaid { code, .. }) if code.trim().is_empty() => {
      report.push(Issue::warning(location.clone(), IssueKind::EmptyMermaid));
    }
    Some(Diagram::Custom { payload, .. }) => validate_custom_diagram(payload, location, report),
    _ => {}
  }
}

fn validate_custom_diagram(payload: &CustomDiagram, location: &Location, report: &mut Report) {
  let mut check_indices = |field: &str, indices: &[usize], len: usize| {
    for &index in indices.iter().filter(|&&i| i >= len) {
      report.push(Issue::error(
        location.clone(),
        IssueKind::DiagramIndexOutOfRange {
          diagram: payload.type_name().to_string(),
          field: field.to_string(),
          index,
          len,
        },
      ));
    }
  };

  match payload {
    CustomDiagram::Array(array) => check_indices("highlight", &array.highlight, array.values.len()),
    CustomDiagram::LinkedList(list) => check_indices("highlight", &list.highlight, list.nodes.len()),
    CustomDiagram::Stack(stack) => check_indices("highlight", &stack.highlight, stack.items.len()),
    CustomDiagram::HashMap(map) => {
      let indices: Vec<usize> = map.buckets.iter().map(|b| b.index).collect();
      check_indices("bucket", &indices, map.bucket_count);
    }
    CustomDiagram::MemoryLayout(layout) => {
      let cells: HashSet<&str> = layout
        .regions
        .iter()
        .flat_map(|r| r.cells.iter().map(|c| c.id.as_str()))
        .collect();
      for pointer in &layout.pointers {
        for end in [&pointer.from, &pointer.to] {
          if !cells.contains(end.as_str()) {
            report.push(Issue::error(
              location.clone(),
              IssueKind::UnknownPointerTarget { cell: end.clone() },
            ));
          }
        }
      }
    }
    CustomDiagram::BinaryTree(_) | CustomDiagram::Heap(_) => {}
  }
}

/// Check that every `crossLanguageId` has a counterpart in another language.
///
/// With fewer than two languages loaded a link cannot be judged, so dangling
/// links are reported as warnings instead of errors.
pub fn validate_cross_language(languages: &[&LanguageConfig]) -> Report {
  let mut report = Report::default();

  let mut owners: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
  for config in languages {
    for (_, entry) in config.entries() {
      if let Some(cross_id) = entry.cross_language_id.as_deref() {
        owners.entry(cross_id).or_default().insert(config.id());
      }
    }
  }

  let severity = if languages.len() >= 2 {
    Severity::Error
  } else {
    Severity::Warning
  };

  for config in languages {
    for (category, entry) in config.entries() {
      let Some(cross_id) = entry.cross_language_id.as_deref() else {
        continue;
      };
      let linked = owners
        .get(cross_id)
        .is_some_and(|langs| langs.iter().any(|lang| *lang != config.id()));
      if !linked {
        report.push(Issue::new(
          severity,
          Location::language(config.id()).with_category(&category.id).with_entry(&entry.id),
          IssueKind::DanglingCrossLanguageId {
            cross_language_id: cross_id.to_string(),
          },
        ));
      }
    }
  }

  report
}
