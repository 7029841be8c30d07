//! Player repository: the registration gateway and read queries.
//!
//! Free functions are generic over `ConnectionTrait` so they run the same on a
//! pooled connection or inside a transaction. `PlayerRepository` is the
//! production `PlayerGateway`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::{debug, info, warn};

use crate::adapters::players_sea::{self as players_adapter, PlayerCreate, PositionSlot};
use crate::db::txn::with_txn;
use crate::domain::{Player, RegisteredPlayer};
use crate::entities::players;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Port the registration use case persists through.
#[async_trait]
pub trait PlayerGateway: Send + Sync {
    /// Resolve the player's positions and store it. Nothing is written when
    /// any step fails.
    async fn register(&self, player: Player) -> Result<RegisteredPlayer, DomainError>;
}

/// SeaORM-backed gateway.
#[derive(Debug, Clone)]
pub struct PlayerRepository {
    db: DatabaseConnection,
}

impl PlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlayerGateway for PlayerRepository {
    async fn register(&self, player: Player) -> Result<RegisteredPlayer, DomainError> {
        with_txn(&self.db, |txn| Box::pin(register_player(txn, player))).await
    }
}

/// Look up each position name in declared order, stopping at the first one
/// that does not exist.
pub async fn resolve_positions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    names: &[String],
) -> Result<Vec<i64>, DomainError> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        match players_adapter::find_position_by_name(conn, name).await? {
            Some(position) => ids.push(position.id),
            None => {
                warn!(position = %name, "unknown position in registration");
                return Err(DomainError::not_found(
                    NotFoundKind::Position,
                    format!("position '{name}' not found"),
                ));
            }
        }
    }
    Ok(ids)
}

/// Resolve positions, then write the player row and its position slots.
/// Callers provide atomicity by passing a transaction.
pub async fn register_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player: Player,
) -> Result<RegisteredPlayer, DomainError> {
    let position_ids = resolve_positions(conn, &player.positions).await?;

    let row = players_adapter::create_player(
        conn,
        PlayerCreate::new(player.name.clone(), player.stats.clone()),
    )
    .await?;
    players_adapter::attach_positions(conn, row.id, &position_ids).await?;

    info!(
        player_id = row.id,
        positions = position_ids.len(),
        "player registered"
    );
    Ok(player.into_registered(row.id))
}

pub async fn find_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<RegisteredPlayer, DomainError> {
    let row = players_adapter::find_player_by_id(conn, player_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("player {player_id} not found"))
        })?;

    let slots = players_adapter::position_slots_for(conn, &[row.id]).await?;
    to_registered(row, slots)
}

pub async fn list_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<RegisteredPlayer>, DomainError> {
    let rows = players_adapter::list_players(conn).await?;
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let mut slots = players_adapter::position_slots_for(conn, &ids).await?;
    debug!(players = rows.len(), slots = slots.len(), "loaded players");

    // Slots are sorted by player id, as are the rows.
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let split = slots
            .iter()
            .position(|s| s.player_id != row.id)
            .unwrap_or(slots.len());
        let rest = slots.split_off(split);
        out.push(to_registered(row, slots)?);
        slots = rest;
    }
    Ok(out)
}

fn to_registered(
    row: players::Model,
    slots: Vec<PositionSlot>,
) -> Result<RegisteredPlayer, DomainError> {
    let stats: BTreeMap<String, f64> = serde_json::from_value(row.stats).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("player {} has unreadable stats: {e}", row.id),
        )
    })?;

    Ok(RegisteredPlayer {
        id: row.id,
        name: row.name,
        stats,
        positions: slots.into_iter().map(|s| s.position_name).collect(),
    })
}
