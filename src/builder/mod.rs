//! Spec builder (verb module)
//!
//! Transforms model values into wire-ready query JSON fragments.

mod build;

pub use build::{build_dimension, build_extraction, build_lookup, build_spec};
