use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::db::require_db;
use crate::domain::{Player, RegisteredPlayer};
use crate::error::AppError;
use crate::extractors::rules::{non_empty_items, null_as_default};
use crate::extractors::ValidatedJson;
use crate::repos::players as players_repo;
use crate::state::app_state::AppState;

/// Body of `POST /players`. Rule codes refer to `extractors::rules`.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterPlayerRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(equal = 6, code = "stat_count"))]
    pub stats: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(
        length(min = 1, code = "min_items"),
        custom(function = "non_empty_items")
    )]
    pub positions: Vec<String>,
}

impl From<RegisterPlayerRequest> for Player {
    fn from(req: RegisterPlayerRequest) -> Self {
        Player::new(req.name, req.stats, req.positions)
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub stats: BTreeMap<String, f64>,
    pub positions: Vec<String>,
}

impl From<RegisteredPlayer> for PlayerResponse {
    fn from(p: RegisteredPlayer) -> Self {
        Self {
            id: p.id,
            name: p.name,
            stats: p.stats,
            positions: p.positions,
        }
    }
}

async fn register_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<RegisterPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let use_case = app_state.register_player()?;
    let registered = use_case.execute(body.into_inner().into()).await?;

    info!(player_id = registered.id, "player created");
    Ok(HttpResponse::Created().json(PlayerResponse::from(registered)))
}

async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let players: Vec<PlayerResponse> = players_repo::list_players(db)
        .await?
        .into_iter()
        .map(PlayerResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(players))
}

async fn get_player(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let player = players_repo::find_player(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(register_player))
            .route(web::get().to(list_players)),
    )
    .service(web::resource("/{id}").route(web::get().to(get_player)));
}
