use actix_web::test;
use futstats_backend::state::app_state::AppState;
use futstats_backend::test_support::create_test_app;
use serde_json::Value;

use crate::support::memory_state;

#[actix_web::test]
async fn test_health_endpoint() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["migrations"]
        .as_str()
        .is_some_and(|v| v.starts_with("m2025")));
    assert!(body["time"].as_str().is_some());
}

#[actix_web::test]
async fn test_health_without_database_reports_db_error() {
    let app = create_test_app(AppState::without_db()).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
}
