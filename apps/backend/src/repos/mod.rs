//! Repository layer: domain-facing persistence, errors mapped to `DomainError`.

pub mod players;
pub mod positions;

pub use players::{PlayerGateway, PlayerRepository};
