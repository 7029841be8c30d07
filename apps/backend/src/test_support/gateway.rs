//! In-memory `PlayerGateway` for exercising the use case without a database.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Player, RegisteredPlayer};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::players::PlayerGateway;

/// Counts calls and keeps registered players in a vector. Positions resolve
/// only against the names given at construction.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    positions: HashSet<String>,
    players: Mutex<Vec<RegisteredPlayer>>,
    calls: AtomicUsize,
}

impl InMemoryGateway {
    pub fn with_positions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positions: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Number of `register` calls received, successful or not.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn players(&self) -> Vec<RegisteredPlayer> {
        self.players
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PlayerGateway for InMemoryGateway {
    async fn register(&self, player: Player) -> Result<RegisteredPlayer, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(missing) = player
            .positions
            .iter()
            .find(|name| !self.positions.contains(name.as_str()))
        {
            return Err(DomainError::not_found(
                NotFoundKind::Position,
                format!("position '{missing}' not found"),
            ));
        }

        let mut players = self
            .players
            .lock()
            .map_err(|_| DomainError::infra(InfraErrorKind::Other("lock".into()), "poisoned"))?;
        let registered = player.into_registered(players.len() as i64 + 1);
        players.push(registered.clone());
        Ok(registered)
    }
}
