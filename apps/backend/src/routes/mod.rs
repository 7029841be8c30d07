use actix_web::web;

use crate::error::AppError;

pub mod health;
pub mod players;
pub mod positions;

/// Register every route. Shared by `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed path parameters go through the same error mapper as everything else.
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::bad_request(err.to_string()).into()),
    );

    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/players").configure(players::configure_routes));
    cfg.service(web::scope("/positions").configure(positions::configure_routes));
}
