//! Player registration use case.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Player, RegisteredPlayer};
use crate::errors::domain::DomainError;
use crate::repos::players::PlayerGateway;

/// Validates a player, then hands it to the gateway.
#[derive(Clone)]
pub struct RegisterPlayer {
    gateway: Arc<dyn PlayerGateway>,
}

impl RegisterPlayer {
    pub fn new(gateway: Arc<dyn PlayerGateway>) -> Self {
        Self { gateway }
    }

    /// The gateway is only reached with a valid player; its result or error
    /// is returned as is.
    pub async fn execute(&self, player: Player) -> Result<RegisteredPlayer, DomainError> {
        if let Err(errs) = player.validate() {
            debug!(violations = errs.len(), "player rejected by domain rules");
            return Err(DomainError::Validation(errs));
        }

        self.gateway.register(player).await
    }
}
