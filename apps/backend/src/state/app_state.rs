use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::repos::players::{PlayerGateway, PlayerRepository};
use crate::services::players::RegisterPlayer;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    register_player: Option<RegisterPlayer>,
}

impl AppState {
    /// State backed by `db`, registering players through the SeaORM repository.
    pub fn new(db: DatabaseConnection) -> Self {
        let gateway: Arc<dyn PlayerGateway> = Arc::new(PlayerRepository::new(db.clone()));
        Self {
            db: Some(db),
            register_player: Some(RegisterPlayer::new(gateway)),
        }
    }

    /// State with neither a database nor a registration gateway.
    pub fn without_db() -> Self {
        Self {
            db: None,
            register_player: None,
        }
    }

    /// Replace the registration gateway, keeping the database (if any) for reads.
    pub fn with_gateway(mut self, gateway: Arc<dyn PlayerGateway>) -> Self {
        self.register_player = Some(RegisterPlayer::new(gateway));
        self
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn register_player(&self) -> Result<&RegisterPlayer, AppError> {
        self.register_player.as_ref().ok_or(AppError::DbUnavailable)
    }
}
