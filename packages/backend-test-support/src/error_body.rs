//! Error body test helpers for backend testing
//!
//! Assertions over the backend's JSON error contract that don't depend on
//! backend types.

use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of a `{field, message}` pair in an error body.
#[derive(Debug, Deserialize)]
pub struct FieldErrorLike {
    pub field: String,
    pub message: String,
}

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorBodyLike {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub errors: Option<Vec<FieldErrorLike>>,
}

/// Assert that response parts conform to the stable error contract and
/// return the parsed body for further checks.
///
/// Validates:
/// - HTTP status matches expected
/// - x-trace-id header is present
/// - content type is JSON
/// - `code` matches expected
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    assert!(
        headers.get("x-trace-id").is_some(),
        "x-trace-id header should be present"
    );

    let content_type = headers
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let body_str =
        String::from_utf8(body_bytes.to_vec()).expect("Response body should be valid UTF-8");
    let body: ErrorBodyLike =
        serde_json::from_str(&body_str).expect("Response body should be a valid error body");

    assert_eq!(body.code, expected_code);
    body
}

/// Same as [`assert_error_body_from_parts`], for a `ServiceResponse`.
pub async fn assert_error_body_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_code)
}
