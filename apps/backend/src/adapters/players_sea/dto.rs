//! DTOs for players_sea adapter.

use std::collections::BTreeMap;

/// DTO for inserting a player row.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub name: String,
    pub stats: BTreeMap<String, f64>,
}

impl PlayerCreate {
    pub fn new(name: impl Into<String>, stats: BTreeMap<String, f64>) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

/// One resolved position slot of a stored player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSlot {
    pub player_id: i64,
    pub slot: i32,
    pub position_name: String,
}
