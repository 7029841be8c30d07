//! The player being registered and its self-contained rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationErrors;

/// Number of stat entries every player must declare.
pub const REQUIRED_STAT_COUNT: usize = 6;

/// A player submission before it has been persisted. It has no identity yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stats: BTreeMap<String, f64>,
    /// Position names in declared order; duplicates are kept.
    pub positions: Vec<String>,
}

/// A player after persistence, carrying the assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredPlayer {
    pub id: i64,
    pub name: String,
    pub stats: BTreeMap<String, f64>,
    pub positions: Vec<String>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        stats: BTreeMap<String, f64>,
        positions: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            stats,
            positions,
        }
    }

    /// Check every rule and report all violations at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();

        if self.name.is_empty() {
            errs.push("name", "Name is required");
        }
        if self.stats.len() != REQUIRED_STAT_COUNT {
            errs.push(
                "stats",
                format!("Stats must contain exactly {REQUIRED_STAT_COUNT} keys"),
            );
        }
        if self.positions.is_empty() {
            errs.push("positions", "At least one position is required");
        }

        errs.into_result()
    }

    pub fn into_registered(self, id: i64) -> RegisteredPlayer {
        RegisteredPlayer {
            id,
            name: self.name,
            stats: self.stats,
            positions: self.positions,
        }
    }
}
