// Rust guideline compliant 2026-02-06

//! Tests for the wire format and response writing.

use serde::{Serialize, Serializer};
use serde_json::json;
use soft_result_core::{
    ApiError, BufferedWriter, Envelope, Locale, LocaleEncoding, RenderOptions, ResponseWriter,
    StatusCode, APPLICATION_JSON,
};

/// Payload whose serialization always fails.
struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("unsupported payload"))
    }
}

fn body_json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).expect("body should be JSON")
}

#[test]
fn test_ok_wire_shape() {
    let envelope = Envelope::ok(json!({"id": 1}));
    let response = envelope.render(&RenderOptions::default());

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, APPLICATION_JSON);
    assert_eq!(
        String::from_utf8(response.body).unwrap(),
        r#"{"isSuccess":true,"locale":1,"messages":["Ok"],"value":{"id":1}}"#
    );
}

#[test]
fn test_bad_request_wire_shape() {
    let envelope = Envelope::<u32>::bad_request_with("Invalid age", "age", -3).unwrap();
    let response = envelope.render(&RenderOptions::default());

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        String::from_utf8(response.body).unwrap(),
        r#"{"isSuccess":false,"locale":1,"messages":["Invalid age"],"errors":[{"message":"Invalid age","metadata":{"age":-3}}]}"#
    );
}

#[test]
fn test_success_omits_errors_and_failure_omits_value() {
    let ok = body_json(&Envelope::ok("payload").render(&RenderOptions::default()).body);
    assert!(ok.get("value").is_some());
    assert!(ok.get("errors").is_none());

    let error = ApiError::with_message("bad").unwrap();
    let failed = body_json(
        &Envelope::<String>::bad_request_error(error)
            .render(&RenderOptions::default())
            .body,
    );
    assert!(failed.get("errors").is_some());
    assert!(failed.get("value").is_none());
}

#[test]
fn test_no_content_omits_value_and_errors() {
    let envelope = Envelope::<u32>::no_content("deleted").unwrap();
    let response = envelope.render(&RenderOptions::default());
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let body = body_json(&response.body);
    assert_eq!(body, json!({"isSuccess": true, "locale": 1, "messages": ["deleted"]}));
}

#[test]
fn test_null_payload_is_omitted() {
    let options = RenderOptions::default();
    let expected = json!({"isSuccess": true, "locale": 1, "messages": ["Ok"]});

    let missing = Envelope::<Option<u32>>::ok(None).render(&options);
    assert_eq!(missing.status, StatusCode::OK);
    assert_eq!(body_json(&missing.body), expected);

    let null = Envelope::ok(serde_json::Value::Null).render(&options);
    assert_eq!(body_json(&null.body), expected);

    let present = Envelope::ok(Some(7u32)).render(&options);
    assert_eq!(body_json(&present.body)["value"], json!(7));
}

#[test]
fn test_locale_name_encoding() {
    let options = RenderOptions {
        locale_encoding: LocaleEncoding::Name,
        ..RenderOptions::default()
    };
    let body = body_json(&Envelope::ok(1).with_locale(Locale::Eng).render(&options).body);
    assert_eq!(body["locale"], json!("Eng"));
}

#[test]
fn test_default_locale_applies_only_when_unset() {
    let options = RenderOptions {
        default_locale: Locale::Kyr,
        ..RenderOptions::default()
    };

    let unset = body_json(&Envelope::ok(1).render(&options).body);
    assert_eq!(unset["locale"], json!(2));

    let explicit = body_json(&Envelope::ok(1).with_locale(Locale::Undefined).render(&options).body);
    assert_eq!(explicit["locale"], json!(0));
}

#[test]
fn test_pretty_output_is_same_document() {
    let envelope = Envelope::ok(json!([1, 2, 3]));
    let compact = envelope.render(&RenderOptions::default());
    let pretty = envelope.render(&RenderOptions {
        pretty: true,
        ..RenderOptions::default()
    });

    assert!(String::from_utf8_lossy(&pretty.body).contains('\n'));
    assert_eq!(body_json(&compact.body), body_json(&pretty.body));
}

#[test]
fn test_rendering_is_idempotent() {
    let envelope = Envelope::<u32>::bad_request_errors(vec![
        ApiError::from_key_value("a", 1).unwrap(),
        ApiError::from_key_value("b", "two").unwrap(),
    ])
    .unwrap();
    let options = RenderOptions::default();

    assert_eq!(envelope.render(&options), envelope.render(&options));
}

#[test]
fn test_serialization_failure_becomes_500() {
    let envelope = Envelope::ok(Unencodable);
    let response = envelope.render(&RenderOptions::default());

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.content_type, APPLICATION_JSON);

    let body = body_json(&response.body);
    let message = body["error"].as_str().unwrap();
    assert!(
        message.starts_with("Serialization error: "),
        "unexpected message: {}",
        message
    );
    assert!(message.contains("unsupported payload"));
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[test]
fn test_to_json_surfaces_serialization_error() {
    let result = Envelope::ok(Unencodable).to_json(&RenderOptions::default());
    assert!(matches!(result, Err(soft_result_core::Error::Serialization(_))));
}

#[tokio::test]
async fn test_write_to_buffered_writer() {
    let mut writer = BufferedWriter::new();
    Envelope::<u32>::not_found("missing")
        .unwrap()
        .write_to(&mut writer, &RenderOptions::default())
        .await
        .unwrap();

    let response = writer.take().expect("response written");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(body_json(&response.body)["messages"], json!(["missing"]));
    assert!(writer.response().is_none());
}

#[tokio::test]
async fn test_write_to_recovers_from_serialization_failure() {
    let mut writer = BufferedWriter::new();
    Envelope::ok(Unencodable)
        .write_to(&mut writer, &RenderOptions::default())
        .await
        .unwrap();

    let response = writer.response().unwrap();
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

/// Writer that fails, standing in for a disconnected client.
struct BrokenPipe;

impl ResponseWriter for BrokenPipe {
    type Error = std::io::Error;

    fn write_response(
        &mut self,
        _response: soft_result_core::RenderedResponse,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send {
        std::future::ready(Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe)))
    }
}

#[tokio::test]
async fn test_write_to_propagates_writer_error() {
    let result = Envelope::ok(1)
        .write_to(&mut BrokenPipe, &RenderOptions::default())
        .await;
    assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::BrokenPipe);
}
