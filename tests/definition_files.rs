//! Integration tests for YAML definition loading
//!
//! A parsed definition must build to the same fragment as the equivalent
//! programmatically constructed spec.

mod common;

use common::load_fixture;
use dimspec::{DimensionSpec, ExtractionFunction, Lookup, LookupOptions};
use serde_json::{json, Map};

#[test]
fn test_web_events_definitions_parse() {
    let set = load_fixture("web_events.yaml");

    assert_eq!(set.dimensions.len(), 3);
    assert!(set.get("country_name").is_some());
    assert!(set.get("browser").is_some());
    assert!(set.get("page").is_some());
    assert!(set.get("missing").is_none());
}

#[test]
fn test_parsed_lookup_builds_like_programmatic() {
    let set = load_fixture("web_events.yaml");
    let parsed = set.get("country_name").unwrap();

    let mut map = Map::new();
    map.insert("US".to_string(), json!("United States"));
    map.insert("FR".to_string(), json!("France"));
    let programmatic = DimensionSpec::with_extraction(
        "country",
        "country_name",
        ExtractionFunction::lookup(
            Lookup::map(map),
            LookupOptions {
                injective: true,
                ..LookupOptions::default()
            },
        ),
    );

    assert_eq!(parsed.build(), programmatic.build());
}

#[test]
fn test_parsed_regex_spec() {
    let set = load_fixture("web_events.yaml");
    let spec = set.get("browser").unwrap();

    assert_eq!(
        spec.build(),
        json!({
            "type": "extraction",
            "dimension": "user_agent",
            "outputName": "browser",
            "extractionFn": {"type": "regex", "expr": r"^(\w+)/"},
        })
    );
}

#[test]
fn test_build_all_preserves_definition_order() {
    let set = load_fixture("web_events.yaml");
    let fragments = set.build_all();

    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[0]["outputName"], "country_name");
    assert_eq!(fragments[1]["outputName"], "browser");
    assert_eq!(fragments[2]["outputName"], "page");
    assert_eq!(fragments[2]["type"], "default");
}

#[test]
fn test_script_transform_definitions() {
    let set = load_fixture("script_transforms.yaml");

    let hour = set.get("hour").unwrap();
    let fragment = hour.build();
    assert_eq!(fragment["extractionFn"]["type"], "javascript");
    assert_eq!(fragment["extractionFn"]["injective"], false);

    let host = set.get("referrer_host").unwrap();
    assert_eq!(host.build()["extractionFn"]["type"], "partial");

    // retainMissingValue set in the file, replacement left to its
    // explicit-null default
    let status = set.get("status_label").unwrap();
    let fragment = status.build();
    assert_eq!(fragment["extractionFn"]["retainMissingValue"], true);
    assert_eq!(
        fragment["extractionFn"]["replaceMissingValueWith"],
        json!(null)
    );
}
