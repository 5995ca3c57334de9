//! The inventory item record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status label shown for items that have been checked.
pub const STATUS_CHECKED: &str = "Checked";

/// Status label shown for items that have not been checked.
pub const STATUS_NOT_CHECKED: &str = "Not Checked";

/// A single inventory item.
///
/// All four fields are present after deserialization; fields missing from
/// the source record take their zero defaults (see [`Item::from_value`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Display label. Not required to be unique.
    pub name: String,
    /// Stock count. No enforced lower bound; negative and zero are valid.
    pub quantity: i64,
    /// Unit cost. No enforced lower bound.
    pub cost: f64,
    /// Whether the item has been manually checked.
    pub verified: bool,
}

impl Item {
    /// Create a new, not-yet-verified item.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: i64, cost: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            cost,
            verified: false,
        }
    }

    /// Serialize to a JSON object with the four record keys.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "quantity": self.quantity,
            "cost": self.cost,
            "verified": self.verified,
        })
    }

    /// Build an item from a JSON value.
    ///
    /// Each key that is absent, or whose JSON type does not match the field,
    /// yields the field default (`""`, `0`, `0.0`, `false`). Never fails.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            quantity: value
                .get("quantity")
                .and_then(Value::as_i64)
                .unwrap_or_default(),
            cost: value
                .get("cost")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
            verified: value
                .get("verified")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }

    /// Two-valued display label derived from the `verified` flag.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.verified {
            STATUS_CHECKED
        } else {
            STATUS_NOT_CHECKED
        }
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
