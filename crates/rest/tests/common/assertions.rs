//! HTTP response assertions.
//!
//! Provides assertion utilities for testing query responses.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response body is a FHIR resource of the expected type.
pub fn assert_resource_type(body: &Value, expected: &str) {
    let actual = body
        .get("resourceType")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert_eq!(
        actual, expected,
        "Expected resourceType {}, got {}",
        expected, actual
    );
}

/// Asserts that the response body is an OperationOutcome with the given issue code.
pub fn assert_operation_outcome(body: &Value, code: &str) {
    assert_resource_type(body, "OperationOutcome");
    assert_eq!(body["issue"][0]["code"], code);
}

/// Asserts that both histograms of a bundle sum to its entry count.
pub fn assert_histograms_consistent(bundle: &Value) {
    let entries = bundle["entry"].as_array().expect("entry array").len() as u64;
    for key in ["chart_data", "age_distribution"] {
        let total: u64 = bundle[key]
            .as_array()
            .unwrap_or_else(|| panic!("{} array", key))
            .iter()
            .map(|bin| bin["value"].as_u64().unwrap())
            .sum();
        assert_eq!(total, entries, "{} does not sum to entry count", key);
    }
}

/// Returns the ages of all bundle entries, in order.
pub fn entry_ages(bundle: &Value) -> Vec<u64> {
    bundle["entry"]
        .as_array()
        .expect("entry array")
        .iter()
        .map(|e| e["resource"]["age"].as_u64().unwrap())
        .collect()
}
