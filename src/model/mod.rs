//! Model types (nouns)
//!
//! These types represent dimension specs before translation to wire JSON.

mod dimension;
mod extraction;

pub use dimension::{DimensionInput, DimensionSet, DimensionSpec};
pub use extraction::{ExtractionFunction, Lookup, LookupExtraction, LookupOptions};
