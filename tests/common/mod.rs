//! Shared test utilities for integration tests

use std::collections::BTreeSet;

use dimspec::{parser, DimensionSet};
use serde_json::Value;

/// Load a definition fixture from the tests/test_data directory
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> DimensionSet {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Keys of a JSON object fragment, order-insensitive
#[allow(dead_code)]
pub fn key_set(value: &Value) -> BTreeSet<String> {
    value
        .as_object()
        .expect("Expected a JSON object fragment")
        .keys()
        .cloned()
        .collect()
}
