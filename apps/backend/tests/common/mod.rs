#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderName;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read the `x-trace-id` header, panicking when it is missing.
pub fn trace_id_of(resp: &ServiceResponse<BoxBody>) -> String {
    let trace_hdr = HeaderName::from_static("x-trace-id");
    resp.headers()
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present")
        .to_string()
}
