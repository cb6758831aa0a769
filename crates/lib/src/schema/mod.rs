//! Content schema.
//!
//! Typed records for everything the frontend renders: entries and their
//! sections, quizzes and challenges, the categories that group them, and the
//! per-language configuration that ties it all together.

mod diagram;
mod types;

pub use diagram::*;
pub use types::*;
