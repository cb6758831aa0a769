//! docpack-lib: content schema, assembly and validation for docpack
//!
//! This crate provides the pieces a documentation frontend's content
//! pipeline needs:
//! - `schema`: typed entries, sections, quizzes, challenges and diagrams
//! - `partition` / `manifest`: content files on disk
//! - `aggregate`: concatenating partitions into a `LanguageConfig`
//! - `validate`: id uniqueness, quiz bounds, highlight ranges, cross-language links
//! - `catalog`: every language under a content root
//! - `index`: lookups, stats and cheat sheets

pub mod aggregate;
pub mod catalog;
pub mod consts;
pub mod index;
pub mod init;
pub mod manifest;
pub mod partition;
pub mod paths;
pub mod schema;
pub mod source;
pub mod util;
pub mod validate;
