//! Definition parser (verb module)
//!
//! Transforms YAML definition files into model types. Field names in the
//! files match the wire key names (`outputName`, `extractionFn`,
//! `retainMissingValue`, ...), and extraction functions use the same tags
//! the builder emits.

use std::path::Path;

use crate::error::ParseError;
use crate::model::DimensionSet;

/// Parse dimension definitions from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DimensionSet, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse dimension definitions from a YAML string
pub fn parse_str(yaml: &str) -> Result<DimensionSet, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}
