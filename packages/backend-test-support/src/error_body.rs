//! Assertions for the backend's JSON error contract.
//!
//! Kept independent of backend types so the contract is checked from the
//! outside, the way a client sees it.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub message: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that a response is a well-formed error:
/// - status matches
/// - JSON content type
/// - `x-trace-id` header present and equal to the body's `trace_id`
/// - `code` matches and `message` contains the expected text
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message_contains: &str,
) -> ErrorBodyLike {
    assert_eq!(resp.status(), expected_status);

    let headers = resp.headers().clone();
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let trace_header = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8")
        .to_string();

    let body = actix_web::test::read_body(resp).await;
    let error: ErrorBodyLike =
        serde_json::from_slice(&body).expect("response body should be an error JSON object");

    assert_eq!(
        error.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );
    assert!(!error.trace_id.is_empty());
    assert_eq!(error.code, expected_code);
    assert!(
        error.message.contains(expected_message_contains),
        "Expected message to contain '{}', but got '{}'",
        expected_message_contains,
        error.message
    );

    error
}
