use actix_web::http::StatusCode;
use actix_web::test;
use futstats_backend::domain::Position;
use futstats_backend::state::app_state::AppState;
use futstats_backend::test_support::create_test_app;
use backend_test_support::error_body::assert_error_body_from_service_response;

use crate::support::memory_state;

#[actix_web::test]
async fn lists_seeded_positions_by_name() {
    let app = create_test_app(memory_state().await).build().await;

    let req = test::TestRequest::get().uri("/positions").to_request();
    let positions: Vec<Position> = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = positions.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Atacante",
            "Goleiro",
            "Lateral",
            "Meio-campo",
            "Volante",
            "Zagueiro"
        ]
    );
}

#[actix_web::test]
async fn listing_without_database_is_a_database_error() {
    let app = create_test_app(AppState::without_db()).build().await;

    let req = test::TestRequest::get().uri("/positions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body_from_service_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "database_error",
    )
    .await;
}
