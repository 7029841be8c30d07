pub mod player_positions;
pub mod players;
pub mod positions;

pub use player_positions::Entity as PlayerPositions;
pub use player_positions::Model as PlayerPosition;
pub use players::Entity as Players;
pub use players::Model as PlayerRow;
pub use positions::Entity as Positions;
pub use positions::Model as Position;
