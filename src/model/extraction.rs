//! Extraction function variants

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::builder;

/// A transform applied to a dimension's raw values before grouping/filtering
///
/// Each variant corresponds to one tagged structure in the engine's
/// extraction-function schema. The structural tag is fixed per variant and
/// emitted by the builder, never stored or user-overridable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExtractionFunction {
    /// Regex capture over the dimension value
    Regex { expr: String },
    /// Regex partial match (same shape as `Regex`, different tag)
    Partial { expr: String },
    /// Script-based transform
    Javascript {
        function: String,
        #[serde(default)]
        injective: bool,
    },
    /// Lookup-table substitution, with a nested lookup sub-value
    Lookup(LookupExtraction),
}

impl ExtractionFunction {
    /// Regex capture extraction
    pub fn regex(expr: impl Into<String>) -> Self {
        ExtractionFunction::Regex { expr: expr.into() }
    }

    /// Regex partial-match extraction
    pub fn partial(expr: impl Into<String>) -> Self {
        ExtractionFunction::Partial { expr: expr.into() }
    }

    /// Script transform, not marked injective
    pub fn javascript(function: impl Into<String>) -> Self {
        ExtractionFunction::Javascript {
            function: function.into(),
            injective: false,
        }
    }

    /// Script transform marked injective (one-to-one hint to the engine)
    pub fn javascript_injective(function: impl Into<String>) -> Self {
        ExtractionFunction::Javascript {
            function: function.into(),
            injective: true,
        }
    }

    /// Lookup extraction with explicit options
    pub fn lookup(lookup: Lookup, options: LookupOptions) -> Self {
        ExtractionFunction::Lookup(LookupExtraction { lookup, options })
    }

    /// Inline map lookup with default options
    pub fn map_lookup(map: Map<String, Value>) -> Self {
        ExtractionFunction::Lookup(LookupExtraction {
            lookup: Lookup::Map { map },
            options: LookupOptions::default(),
        })
    }

    /// Translate into the wire-ready extraction-function fragment
    pub fn build(&self) -> Value {
        builder::build_extraction(self)
    }
}

/// Payload of a lookup extraction: the nested sub-value plus the shared
/// option fields, which sit at the same level on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupExtraction {
    pub lookup: Lookup,
    #[serde(flatten)]
    pub options: LookupOptions,
}

/// Shared options carried by every lookup extraction
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LookupOptions {
    /// Keep unmatched values instead of dropping them
    #[serde(rename = "retainMissingValue", default)]
    pub retain_missing_value: bool,
    /// Replacement for unmatched values. `None` is emitted as an explicit
    /// null on the wire, not omitted.
    #[serde(rename = "replaceMissingValueWith", default)]
    pub replace_missing_value_with: Option<Value>,
    /// One-to-one hint to the engine
    #[serde(default)]
    pub injective: bool,
}

/// The nested lookup sub-value referenced by a lookup extraction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Lookup {
    /// Inline key-to-value table, passed through to the wire verbatim
    Map { map: Map<String, Value> },
}

impl Lookup {
    /// Inline map lookup
    pub fn map(map: Map<String, Value>) -> Self {
        Lookup::Map { map }
    }

    /// Translate into the wire-ready lookup fragment
    pub fn build(&self) -> Value {
        builder::build_lookup(self)
    }
}
