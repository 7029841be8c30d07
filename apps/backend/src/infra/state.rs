use std::sync::Arc;

use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::repos::players::PlayerGateway;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_kind: Option<DbKind>,
    gateway: Option<Arc<dyn PlayerGateway>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    /// Register players through `gateway` instead of the database repository.
    pub fn with_gateway(mut self, gateway: Arc<dyn PlayerGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let state = match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => AppState::new(connect_db(kind).await?),
            None => AppState::without_db(),
        };

        Ok(match self.gateway {
            Some(gateway) => state.with_gateway(gateway),
            None => state,
        })
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
