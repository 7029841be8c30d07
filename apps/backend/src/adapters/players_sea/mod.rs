//! SeaORM adapter for player persistence - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::{player_positions, players, positions};

pub mod dto;

pub use dto::{PlayerCreate, PositionSlot};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_position_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<positions::Model>, DbErr> {
    positions::Entity::find()
        .filter(positions::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, DbErr> {
    let stats = serde_json::to_value(&dto.stats).map_err(|e| DbErr::Json(e.to_string()))?;
    let now = OffsetDateTime::now_utc();

    let player = players::ActiveModel {
        name: Set(dto.name),
        stats: Set(stats),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    player.insert(conn).await
}

/// Link `position_ids` to a player, one row per slot in the given order.
pub async fn attach_positions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    position_ids: &[i64],
) -> Result<(), DbErr> {
    if position_ids.is_empty() {
        return Ok(());
    }

    let rows = position_ids
        .iter()
        .enumerate()
        .map(|(slot, position_id)| player_positions::ActiveModel {
            player_id: Set(player_id),
            slot: Set(slot as i32),
            position_id: Set(*position_id),
        });

    player_positions::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

pub async fn find_player_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn list_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<players::Model>, DbErr> {
    players::Entity::find()
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

/// Position slots of the given players, ordered by player then slot.
pub async fn position_slots_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<PositionSlot>, DbErr> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = player_positions::Entity::find()
        .filter(player_positions::Column::PlayerId.is_in(player_ids.iter().copied()))
        .order_by_asc(player_positions::Column::PlayerId)
        .order_by_asc(player_positions::Column::Slot)
        .find_also_related(positions::Entity)
        .all(conn)
        .await?;

    rows.into_iter()
        .map(|(link, position)| {
            let position = position.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "position {} referenced by player {}",
                    link.position_id, link.player_id
                ))
            })?;
            Ok(PositionSlot {
                player_id: link.player_id,
                slot: link.slot,
                position_name: position.name,
            })
        })
        .collect()
}
