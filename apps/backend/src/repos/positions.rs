//! Canonical position reads.

use sea_orm::ConnectionTrait;

use crate::adapters::positions_sea;
use crate::domain::Position;
use crate::errors::domain::DomainError;

/// All canonical positions, sorted by name.
pub async fn list_positions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Position>, DomainError> {
    let rows = positions_sea::list_positions(conn).await?;
    Ok(rows
        .into_iter()
        .map(|p| Position {
            id: p.id,
            name: p.name,
        })
        .collect())
}
