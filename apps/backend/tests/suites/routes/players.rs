use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body_from_service_response;
use futstats_backend::db::require_db;
use futstats_backend::entities::{PlayerPositions, Players};
use futstats_backend::state::app_state::AppState;
use futstats_backend::test_support::{create_test_app, InMemoryGateway};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{json, Value};

use crate::common::trace_id_of;
use crate::support::{memory_state, player_body, six_stats};

#[actix_web::test]
async fn register_returns_created_player() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player_body("Pelé", &["Atacante"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Pelé");
    assert_eq!(body["positions"], json!(["Atacante"]));
    assert_eq!(body["stats"], json!(six_stats()));
    assert!(body["id"].as_i64().is_some());
}

#[actix_web::test]
async fn registered_player_is_readable_by_id_and_in_list() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player_body("Rivelino", &["Meio-campo", "Atacante"]))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/players/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::get().uri("/players").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([created]));
}

#[actix_web::test]
async fn unknown_position_is_rejected_and_nothing_is_stored() {
    let state = memory_state().await;
    let db = require_db(&state).expect("db").clone();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player_body("Pelé", &["Ala"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = assert_error_body_from_service_response(
        resp,
        StatusCode::UNPROCESSABLE_ENTITY,
        "invalid_data",
    )
    .await;
    assert_eq!(body.message, "position 'Ala' not found");
    assert!(body.errors.is_none());

    let stored = Players::find()
        .filter(futstats_backend::entities::players::Column::Name.eq("Pelé"))
        .count(&db)
        .await
        .expect("count");
    assert_eq!(stored, 0);
    assert_eq!(PlayerPositions::find().count(&db).await.expect("count"), 0);
}

#[actix_web::test]
async fn wrong_stat_count_lists_the_stats_field() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({
            "name": "Pelé",
            "stats": {"pace": 99.0, "shooting": 98.0},
            "positions": ["Atacante"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body =
        assert_error_body_from_service_response(resp, StatusCode::BAD_REQUEST, "bad_request")
            .await;

    let errors = body.errors.expect("field errors");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "stats");
    assert_eq!(errors[0].message, "Stats must contain exactly 6 keys");
}

#[actix_web::test]
async fn missing_fields_are_all_reported() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body =
        assert_error_body_from_service_response(resp, StatusCode::BAD_REQUEST, "bad_request")
            .await;

    let fields: Vec<String> = body
        .errors
        .expect("field errors")
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["name", "positions", "stats"]);
}

#[actix_web::test]
async fn null_fields_are_reported_like_missing_ones() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({"name": null, "stats": null, "positions": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body =
        assert_error_body_from_service_response(resp, StatusCode::BAD_REQUEST, "bad_request")
            .await;

    assert_eq!(body.message, "Validation failed");
    let fields: Vec<String> = body
        .errors
        .expect("field errors")
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["name", "positions", "stats"]);
}

#[actix_web::test]
async fn unknown_field_is_an_opaque_bad_request() {
    let app = create_test_app(memory_state().await).build().await;

    let mut payload = player_body("Pelé", &["Atacante"]);
    payload["club"] = json!("Santos");
    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body =
        assert_error_body_from_service_response(resp, StatusCode::BAD_REQUEST, "bad_request")
            .await;
    assert_eq!(body.message, "Bad request");
    assert!(body.errors.is_none());
}

#[actix_web::test]
async fn malformed_json_is_an_opaque_bad_request() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "Pelé", "stats": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body =
        assert_error_body_from_service_response(resp, StatusCode::BAD_REQUEST, "bad_request")
            .await;
    assert!(body.errors.is_none());
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player_body("Pelé", &["Ala"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header")
        .to_string();
    assert_eq!(trace_id_of(&resp), request_id);
}

#[actix_web::test]
async fn missing_player_is_not_found() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::get().uri("/players/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body_from_service_response(resp, StatusCode::NOT_FOUND, "not_found").await;
}

#[actix_web::test]
async fn non_numeric_player_id_is_bad_request() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::get().uri("/players/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body_from_service_response(resp, StatusCode::BAD_REQUEST, "bad_request").await;
}

#[actix_web::test]
async fn register_without_database_is_unavailable() {
    let app = create_test_app(AppState::without_db()).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player_body("Pelé", &["Atacante"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body_from_service_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "database_error",
    )
    .await;
}

#[actix_web::test]
async fn register_goes_through_injected_gateway() {
    let gateway = Arc::new(InMemoryGateway::with_positions(["Atacante"]));
    let state = AppState::without_db().with_gateway(gateway.clone());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player_body("Pelé", &["Atacante"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    assert_eq!(gateway.calls(), 1);
    assert_eq!(gateway.players()[0].name, "Pelé");
}

#[actix_web::test]
async fn blank_position_entry_never_reaches_gateway() {
    let gateway = Arc::new(InMemoryGateway::with_positions(["Atacante"]));
    let state = AppState::without_db().with_gateway(gateway.clone());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player_body("Pelé", &["Atacante", ""]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body =
        assert_error_body_from_service_response(resp, StatusCode::BAD_REQUEST, "bad_request")
            .await;
    assert_eq!(body.errors.expect("field errors")[0].field, "positions");
    assert_eq!(gateway.calls(), 0);
}
