//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for triage results that give
//! more meaningful error messages than standard assertions.

use domain_triage::{FieldName, RouteDecision, TriageResult};
use serde_json::Value;

/// The exact top-level keys of the serialized triage result
pub const RESULT_KEYS: [&str; 4] = ["extractedFields", "missingFields", "recommendedRoute", "reasoning"];

/// Asserts the recommended route, reporting the reasoning on failure
pub fn assert_route(result: &TriageResult, expected: RouteDecision) {
    assert_eq!(
        result.recommended_route(),
        expected,
        "Expected route {}, got {} (rule: {}, reasoning: {})",
        expected,
        result.recommended_route(),
        result.fired_rule(),
        result.reasoning()
    );
}

/// Asserts the missing-fields list exactly, in order
pub fn assert_missing(result: &TriageResult, expected: &[FieldName]) {
    assert_eq!(
        result.missing_fields(),
        expected,
        "Missing fields mismatch; extracted: {:?}",
        result.extracted_fields()
    );
}

/// Asserts that nothing mandatory is missing
pub fn assert_complete(result: &TriageResult) {
    assert!(
        result.missing_fields().is_empty(),
        "Expected a complete claim, missing: {:?}",
        result.missing_fields()
    );
}

/// Asserts that serialized JSON has exactly the four result keys with the right shapes
pub fn assert_json_contract(json: &Value) {
    let object = json.as_object().expect("triage result must serialize to an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = RESULT_KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected, "Unexpected top-level keys");

    assert!(json["extractedFields"].is_object(), "extractedFields must be an object");
    assert!(json["missingFields"].is_array(), "missingFields must be an array");
    assert!(json["reasoning"].is_string(), "reasoning must be a string");

    let route = json["recommendedRoute"]
        .as_str()
        .expect("recommendedRoute must be a string");
    assert!(
        route.parse::<RouteDecision>().is_ok(),
        "recommendedRoute {:?} is not a known route",
        route
    );
}
