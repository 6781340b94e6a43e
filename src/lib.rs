//! dimspec - Build analytics dimension specs into query-engine JSON
//!
//! This library provides:
//! - Dimension spec types (DimensionSpec, ExtractionFunction, Lookup)
//! - Definition parsing from YAML
//! - Wire fragment construction (nested `serde_json::Value` structures)
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `model/` - dimension concepts (DimensionSpec, DimensionInput,
//!   ExtractionFunction, Lookup, LookupOptions, DimensionSet)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML definition files → DimensionSet
//! - `builder/` - model values → query JSON fragments
//!
//! # Example
//!
//! ```
//! use dimspec::{DimensionSpec, ExtractionFunction};
//!
//! let spec = DimensionSpec::with_extraction(
//!     "user_agent",
//!     "browser",
//!     ExtractionFunction::regex(r"^(\w+)/"),
//! );
//! let fragment = spec.build();
//! assert_eq!(fragment["type"], "extraction");
//! assert_eq!(fragment["extractionFn"]["expr"], r"^(\w+)/");
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use builder::{build_dimension, build_extraction, build_lookup, build_spec};
pub use error::ParseError;
pub use model::{
    DimensionInput, DimensionSet, DimensionSpec, ExtractionFunction, Lookup, LookupExtraction,
    LookupOptions,
};
