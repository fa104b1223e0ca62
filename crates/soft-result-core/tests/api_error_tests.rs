// Rust guideline compliant 2026-02-06

//! Unit tests for client-facing error values.

use serde_json::json;
use soft_result_core::{metadata_to_string, ApiError, Error, Metadata};

fn metadata(entries: &[(&str, serde_json::Value)]) -> Metadata {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_default_error_message() {
    let error = ApiError::new();
    assert_eq!(error.message(), "Error");
    assert!(error.metadata().is_empty());
    assert_eq!(ApiError::default(), error);
}

#[test]
fn test_with_message_keeps_text() {
    let error = ApiError::with_message("Email is required").unwrap();
    assert_eq!(error.message(), "Email is required");
    assert!(error.metadata().is_empty());
    assert_eq!(error.to_string(), "Email is required");
}

#[test]
fn test_with_message_rejects_blank() {
    for blank in ["", "   ", "\n\t"] {
        let result = ApiError::with_message(blank);
        assert!(
            matches!(result, Err(Error::InvalidArgument(_))),
            "blank message {:?} should be rejected",
            blank
        );
    }
}

#[test]
fn test_with_metadata_allows_empty_metadata() {
    let error = ApiError::with_metadata("Validation failed", Metadata::new()).unwrap();
    assert_eq!(error.message(), "Validation failed");
    assert!(error.metadata().is_empty());
}

#[test]
fn test_with_metadata_keeps_explicit_message() {
    let meta = metadata(&[("email", json!("must contain @"))]);
    let error = ApiError::with_metadata("Validation failed", meta.clone()).unwrap();
    assert_eq!(error.message(), "Validation failed");
    assert_eq!(error.metadata(), &meta);
}

#[test]
fn test_from_metadata_derives_message() {
    let meta = metadata(&[("name", json!("required")), ("age", json!(-1))]);
    let error = ApiError::from_metadata(meta.clone()).unwrap();
    assert_eq!(error.message(), "age: -1\nname: required");
    assert_eq!(error.metadata(), &meta);
}

#[test]
fn test_from_metadata_rejects_empty() {
    let result = ApiError::from_metadata(Metadata::new());
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_from_key_value() {
    let error = ApiError::from_key_value("userId", 42).unwrap();
    assert_eq!(error.message(), "userId: 42");
    assert_eq!(error.metadata().len(), 1);
    assert_eq!(error.metadata().get("userId"), Some(&json!(42)));
}

#[test]
fn test_from_key_value_string_value_is_unquoted() {
    let error = ApiError::from_key_value("email", "already taken").unwrap();
    assert_eq!(error.message(), "email: already taken");
}

#[test]
fn test_from_key_value_rejects_blank_key() {
    let result = ApiError::from_key_value(" ", "x");
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_from_key_value_rejects_null_value() {
    let result = ApiError::from_key_value("email", serde_json::Value::Null);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_metadata_to_string_nested_values_are_compact_json() {
    let meta = metadata(&[("range", json!({"min": 1, "max": 5}))]);
    assert_eq!(
        metadata_to_string(&meta).unwrap(),
        r#"range: {"max":5,"min":1}"#
    );
}

#[test]
fn test_error_serializes_message_and_metadata() {
    let error = ApiError::from_key_value("id", "abc").unwrap();
    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(value, json!({"message": "id: abc", "metadata": {"id": "abc"}}));
}

#[test]
fn test_error_deserialize_defaults_metadata() {
    let error: ApiError = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
    assert_eq!(error.message(), "boom");
    assert!(error.metadata().is_empty());
}

#[test]
fn test_error_deserialize_rejects_blank_message() {
    let result = serde_json::from_str::<ApiError>(r#"{"message":"  ","metadata":{}}"#);
    assert!(result.is_err());
}

#[test]
fn test_into_parts() {
    let error = ApiError::from_key_value("k", "v").unwrap();
    let (message, meta) = error.into_parts();
    assert_eq!(message, "k: v");
    assert_eq!(meta.get("k"), Some(&json!("v")));
}
