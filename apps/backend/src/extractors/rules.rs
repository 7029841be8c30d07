//! Structural rules shared by request DTOs.
//!
//! DTOs reference the codes below in their `#[validate(...)]` attributes. The
//! registry maps each code to the message clients see, and is built once per
//! process on first use.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Deserializer};
use tracing::debug;
use validator::ValidationError;

pub const REQUIRED: &str = "required";
pub const MIN_ITEMS: &str = "min_items";
pub const STAT_COUNT: &str = "stat_count";
pub const ITEM_REQUIRED: &str = "item_required";

const FALLBACK_MESSAGE: &str = "Invalid value";

/// Code -> client message for every structural rule.
#[derive(Debug)]
pub struct StructuralRules {
    messages: HashMap<&'static str, &'static str>,
}

impl StructuralRules {
    fn register() -> Self {
        let messages = HashMap::from([
            (REQUIRED, "This field is required"),
            (MIN_ITEMS, "Must contain at least one item"),
            (STAT_COUNT, "Stats must contain exactly 6 keys"),
            (ITEM_REQUIRED, "Items must not be empty"),
        ]);
        debug!(rules = messages.len(), "structural validation rules registered");
        Self { messages }
    }

    pub fn message_for(&self, code: &str) -> &'static str {
        self.messages.get(code).copied().unwrap_or(FALLBACK_MESSAGE)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

static RULES: OnceCell<StructuralRules> = OnceCell::new();

/// The process-wide rule registry.
pub fn rules() -> &'static StructuralRules {
    RULES.get_or_init(StructuralRules::register)
}

/// Every entry of a string list must be non-empty.
pub fn non_empty_items(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|s| s.is_empty()) {
        return Err(ValidationError::new(ITEM_REQUIRED));
    }
    Ok(())
}

/// Decode JSON `null` as the type's empty value so the structural rule for
/// the field reports it. Pair with `#[serde(default)]` for absent fields.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
