//! Tests for the domain error taxonomy.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn short_title() -> FieldViolation {
    FieldViolation::new("title", FieldLocation::Body, "title must be at least 3 characters")
        .with_value(json!("ab"))
}

#[rstest]
#[case(Error::internal("boom"), 500)]
#[case(Error::unauthorized("Token required"), 401)]
#[case(Error::generic("teapot", 418), 418)]
#[case(Error::validation(Vec::new()), 400)]
#[case(Error::not_found("Category"), 404)]
fn status_follows_kind(#[case] error: Error, #[case] expected: u16) {
    assert_eq!(error.status(), expected);
}

#[rstest]
fn not_found_formats_resource_name() {
    let error = Error::not_found("Category");
    assert_eq!(error.message(), "Category not found");
    assert!(error.details().is_none());
}

#[rstest]
fn validation_uses_default_message(short_title: FieldViolation) {
    let error = Error::validation(vec![short_title]);
    assert_eq!(error.message(), VALIDATION_MESSAGE);
    assert_eq!(error.violations().len(), 1);
}

#[rstest]
fn validation_details_list_every_violation_in_order(short_title: FieldViolation) {
    let missing = FieldViolation::new(
        "categoryId",
        FieldLocation::Body,
        "categoryId must be an integer",
    );
    let error = Error::validation(vec![short_title, missing]);

    let details = error.details().expect("validation details");
    let fields: Vec<_> = details
        .as_array()
        .expect("array of violations")
        .iter()
        .filter_map(|entry| entry.get("field").and_then(serde_json::Value::as_str))
        .collect();
    assert_eq!(fields, ["title", "categoryId"]);
    assert_eq!(
        details.pointer("/0/location"),
        Some(&json!("body")),
        "locations serialise in lowercase"
    );
    assert_eq!(details.pointer("/0/value"), Some(&json!("ab")));
    assert!(details.pointer("/1/value").is_none());
}

#[rstest]
fn with_details_only_applies_to_generic_errors() {
    let generic = Error::internal("boom").with_details(json!({"hint": "retry"}));
    assert_eq!(generic.details(), Some(json!({"hint": "retry"})));

    let not_found = Error::not_found("Category").with_details(json!({"ignored": true}));
    assert!(not_found.details().is_none());
}

#[rstest]
fn display_matches_message() {
    let error = Error::unauthorized("Token required");
    assert_eq!(error.to_string(), "Token required");
}
