//! Query fragment construction
//!
//! Every function here is a pure translation from a model value to the
//! nested JSON structure the engine's query protocol expects.

use serde_json::{json, Map, Value};

use crate::model::{DimensionInput, DimensionSpec, ExtractionFunction, Lookup};

/// Build a dimension input into its wire representation
///
/// Bare field names pass through unchanged; full specs are translated.
/// Never validates field-name contents.
pub fn build_dimension(input: &DimensionInput) -> Value {
    match input {
        DimensionInput::Field(name) => Value::String(name.clone()),
        DimensionInput::Spec(spec) => build_spec(spec),
    }
}

/// Build a dimension spec
///
/// Emits exactly `type`, `dimension`, `outputName`, and optionally
/// `extractionFn`. The `type` is "default" without an extraction function
/// and "extraction" with one. When absent, `extractionFn` is omitted
/// entirely, never set to null; the engine distinguishes "no extraction"
/// by key absence.
pub fn build_spec(spec: &DimensionSpec) -> Value {
    let mut out = Map::new();
    out.insert("type".to_string(), json!("default"));
    out.insert("dimension".to_string(), json!(spec.dimension));
    out.insert("outputName".to_string(), json!(spec.output_name));

    if let Some(f) = &spec.extraction_function {
        out.insert("type".to_string(), json!("extraction"));
        out.insert("extractionFn".to_string(), build_extraction(f));
    }

    Value::Object(out)
}

/// Build an extraction function
///
/// Every variant emits `{type: <tag>}` plus its payload fields.
pub fn build_extraction(f: &ExtractionFunction) -> Value {
    match f {
        ExtractionFunction::Regex { expr } => tagged_expr("regex", expr),
        ExtractionFunction::Partial { expr } => tagged_expr("partial", expr),
        ExtractionFunction::Javascript {
            function,
            injective,
        } => json!({
            "type": "javascript",
            "function": function,
            "injective": injective,
        }),
        ExtractionFunction::Lookup(ext) => json!({
            "type": "lookup",
            "lookup": build_lookup(&ext.lookup),
            "retainMissingValue": ext.options.retain_missing_value,
            // Emitted as explicit null when no replacement was supplied.
            // This is the one key where "missing" is null, not omission.
            "replaceMissingValueWith": ext.options.replace_missing_value_with,
            "injective": ext.options.injective,
        }),
    }
}

// Regex and partial share one shape; only the tag differs.
fn tagged_expr(tag: &str, expr: &str) -> Value {
    json!({ "type": tag, "expr": expr })
}

/// Build the nested lookup sub-value
pub fn build_lookup(lookup: &Lookup) -> Value {
    match lookup {
        // The mapping is forwarded verbatim, not deep-copied or validated
        Lookup::Map { map } => json!({
            "type": "map",
            "map": map,
        }),
    }
}
