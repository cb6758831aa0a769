//! Multi-language catalogs.
//!
//! A content root holds one directory per language, each with its own
//! `language.yaml` manifest:
//!
//! ```text
//! content/
//! ├── cpp/
//! │   ├── language.yaml
//! │   ├── part1.yaml
//! │   └── part2.yaml
//! └── python/
//!     ├── language.yaml
//!     └── basics.yaml
//! ```
//!
//! Loading a catalog assembles every language it finds. Cross-language checks
//! (`crossLanguageId` linkage) only make sense at this level.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::aggregate::{LoadedLanguage, load_language};
use crate::manifest::find_manifest;
use crate::schema::{DocCategory, DocEntry, LanguageConfig};
use crate::source::LoadError;
use crate::validate::{Report, validate_cross_language, validate_language};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("content root not found: {}", path.display())]
  RootNotFound { path: PathBuf },

  #[error("failed to scan content root {}: {message}", path.display())]
  Scan { path: PathBuf, message: String },

  #[error("no language manifests found under {}", path.display())]
  Empty { path: PathBuf },

  #[error("language `{id}` is declared by both {} and {}", first.display(), second.display())]
  DuplicateLanguage { id: String, first: PathBuf, second: PathBuf },

  #[error("unknown language `{id}` (available: {})", .available.join(", "))]
  UnknownLanguage { id: String, available: Vec<String> },

  #[error(transparent)]
  Load(#[from] LoadError),
}

/// Every language under one content root, sorted by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  root: PathBuf,
  languages: Vec<LoadedLanguage>,
}

impl Catalog {
  /// Build a catalog from already-loaded languages.
  ///
  /// # Errors
  ///
  /// Returns [`CatalogError::DuplicateLanguage`] if two languages share an id.
  pub fn from_languages(root: impl Into<PathBuf>, mut languages: Vec<LoadedLanguage>) -> Result<Self, CatalogError> {
    languages.sort_by(|a, b| a.config.id().cmp(b.config.id()));

    if let Some(pair) = languages.windows(2).find(|w| w[0].config.id() == w[1].config.id()) {
      return Err(CatalogError::DuplicateLanguage {
        id: pair[0].config.id().to_string(),
        first: pair[0].manifest_path.clone(),
        second: pair[1].manifest_path.clone(),
      });
    }

    Ok(Self {
      root: root.into(),
      languages,
    })
  }

  /// Load every language directory directly under `root`.
  ///
  /// Directories without a manifest are skipped with a warning.
  ///
  /// # Errors
  ///
  /// Returns an error if the root is missing, holds no languages, or any
  /// language fails to load.
  pub fn load(root: &Path) -> Result<Self, CatalogError> {
    if !root.is_dir() {
      return Err(CatalogError::RootNotFound {
        path: root.to_path_buf(),
      });
    }

    let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let mut languages = Vec::new();

    let walker = WalkDir::new(&root).min_depth(1).max_depth(1).sort_by_file_name();
    for dir in walker {
      let dir = dir.map_err(|e| CatalogError::Scan {
        path: root.clone(),
        message: e.to_string(),
      })?;
      if !dir.file_type().is_dir() {
        continue;
      }

      match find_manifest(dir.path()) {
        Some(manifest_path) => {
          debug!(path = ?manifest_path, "found language manifest");
          languages.push(load_language(&manifest_path)?);
        }
        None => warn!(path = ?dir.path(), "directory has no language manifest, skipping"),
      }
    }

    if languages.is_empty() {
      return Err(CatalogError::Empty { path: root });
    }

    Self::from_languages(root, languages)
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn languages(&self) -> &[LoadedLanguage] {
    &self.languages
  }

  pub fn configs(&self) -> impl Iterator<Item = &LanguageConfig> {
    self.languages.iter().map(|l| &l.config)
  }

  pub fn language_ids(&self) -> Vec<String> {
    self.configs().map(|c| c.id().to_string()).collect()
  }

  /// Look up a language by id.
  ///
  /// # Errors
  ///
  /// Returns [`CatalogError::UnknownLanguage`] listing the available ids.
  pub fn language(&self, id: &str) -> Result<&LoadedLanguage, CatalogError> {
    self
      .languages
      .iter()
      .find(|l| l.config.id() == id)
      .ok_or_else(|| CatalogError::UnknownLanguage {
        id: id.to_string(),
        available: self.language_ids(),
      })
  }

  /// Languages matching an optional id filter.
  ///
  /// # Errors
  ///
  /// Returns [`CatalogError::UnknownLanguage`] if `id` names no language.
  pub fn select(&self, id: Option<&str>) -> Result<Vec<&LoadedLanguage>, CatalogError> {
    match id {
      Some(id) => Ok(vec![self.language(id)?]),
      None => Ok(self.languages.iter().collect()),
    }
  }

  /// Validate every language plus cross-language linkage.
  pub fn validate(&self) -> Report {
    let mut report = Report::default();
    for language in &self.languages {
      report.merge(validate_language(&language.config, Some(&language.provenance)));
    }
    let configs: Vec<&LanguageConfig> = self.configs().collect();
    report.merge(validate_cross_language(&configs));
    report
  }

  /// Validate the languages matching an optional id filter.
  ///
  /// Cross-language links are still judged against the whole catalog, but
  /// only issues located in the selected languages are kept.
  ///
  /// # Errors
  ///
  /// Returns [`CatalogError::UnknownLanguage`] if `id` names no language.
  pub fn validate_selected(&self, id: Option<&str>) -> Result<Report, CatalogError> {
    let Some(id) = id else {
      return Ok(self.validate());
    };

    let language = self.language(id)?;
    let mut report = validate_language(&language.config, Some(&language.provenance));

    let configs: Vec<&LanguageConfig> = self.configs().collect();
    let cross = validate_cross_language(&configs);
    report.merge(Report {
      issues: cross.issues.into_iter().filter(|i| i.location.language == id).collect(),
    });

    Ok(report)
  }

  /// Entries sharing a `crossLanguageId`, in language order.
  pub fn equivalents(&self, cross_language_id: &str) -> Vec<Equivalent<'_>> {
    self
      .configs()
      .flat_map(|config| {
        config
          .entries()
          .filter(move |(_, entry)| entry.cross_language_id.as_deref() == Some(cross_language_id))
          .map(move |(category, entry)| Equivalent {
            language: config,
            category,
            entry,
          })
      })
      .collect()
  }
}

/// An entry found through a cross-language lookup.
#[derive(Debug, Clone, Copy)]
pub struct Equivalent<'a> {
  pub language: &'a LanguageConfig,
  pub category: &'a DocCategory,
  pub entry: &'a DocEntry,
}
