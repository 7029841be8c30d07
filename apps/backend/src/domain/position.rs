use serde::{Deserialize, Serialize};

/// A canonical position. Seeded by migrations, only ever read at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: i64,
    pub name: String,
}
