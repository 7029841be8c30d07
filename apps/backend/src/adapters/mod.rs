//! Adapters for external dependencies.

pub mod players_sea;
pub mod positions_sea;
