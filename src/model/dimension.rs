//! Dimension spec types

use serde::Deserialize;
use serde_json::Value;

use super::extraction::ExtractionFunction;
use crate::builder;

/// A dimension specification
///
/// Pairs a source field name with an output name and an optional extraction
/// transform. Immutable once constructed; `build()` translates it into the
/// engine's dimension-spec JSON fragment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DimensionSpec {
    /// Source field identifier in the engine's data model
    pub dimension: String,
    /// Name the dimension takes in query results
    #[serde(rename = "outputName")]
    pub output_name: String,
    /// Optional transform applied to raw values before grouping/filtering
    #[serde(rename = "extractionFn", default)]
    pub extraction_function: Option<ExtractionFunction>,
}

impl DimensionSpec {
    /// Create a spec with no extraction function
    pub fn new(dimension: impl Into<String>, output_name: impl Into<String>) -> Self {
        DimensionSpec {
            dimension: dimension.into(),
            output_name: output_name.into(),
            extraction_function: None,
        }
    }

    /// Create a spec with an extraction function
    pub fn with_extraction(
        dimension: impl Into<String>,
        output_name: impl Into<String>,
        extraction_function: ExtractionFunction,
    ) -> Self {
        DimensionSpec {
            dimension: dimension.into(),
            output_name: output_name.into(),
            extraction_function: Some(extraction_function),
        }
    }

    /// Translate into the wire-ready dimension-spec fragment
    pub fn build(&self) -> Value {
        builder::build_spec(self)
    }
}

/// Input accepted wherever a dimension is expected
///
/// Callers may supply a bare field name instead of a full spec; bare names
/// pass through to the output unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionInput {
    /// Bare field name, forwarded verbatim
    Field(String),
    /// Full dimension spec, translated on build
    Spec(DimensionSpec),
}

impl DimensionInput {
    /// Translate into the wire representation
    pub fn build(&self) -> Value {
        builder::build_dimension(self)
    }
}

impl From<&str> for DimensionInput {
    fn from(name: &str) -> Self {
        DimensionInput::Field(name.to_string())
    }
}

impl From<String> for DimensionInput {
    fn from(name: String) -> Self {
        DimensionInput::Field(name)
    }
}

impl From<DimensionSpec> for DimensionInput {
    fn from(spec: DimensionSpec) -> Self {
        DimensionInput::Spec(spec)
    }
}

/// A named collection of dimension specs, as loaded from a definition file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DimensionSet {
    pub dimensions: Vec<DimensionSpec>,
}

impl DimensionSet {
    /// Look up a spec by its output name
    pub fn get(&self, output_name: &str) -> Option<&DimensionSpec> {
        self.dimensions.iter().find(|d| d.output_name == output_name)
    }

    /// Build every spec in definition order
    pub fn build_all(&self) -> Vec<Value> {
        self.dimensions.iter().map(builder::build_spec).collect()
    }
}
