//! Domain layer: the player entity and its rules.

pub mod player;
pub mod position;


pub use player::{Player, RegisteredPlayer, REQUIRED_STAT_COUNT};
pub use position::Position;
