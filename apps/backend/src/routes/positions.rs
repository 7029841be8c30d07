use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::error::AppError;
use crate::repos::positions as positions_repo;
use crate::state::app_state::AppState;

async fn list_positions(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let positions = positions_repo::list_positions(db).await?;
    Ok(HttpResponse::Ok().json(positions))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_positions));
}
