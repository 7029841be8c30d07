//! SeaORM adapter for the canonical positions table.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entities::positions;

pub async fn list_positions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<positions::Model>, DbErr> {
    positions::Entity::find()
        .order_by_asc(positions::Column::Name)
        .all(conn)
        .await
}
