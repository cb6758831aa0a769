//! Language manifests.
//!
//! A manifest (`language.yaml`) carries a language's metadata and the ordered
//! list of partition files that make up its categories.

mod types;

pub use types::*;
