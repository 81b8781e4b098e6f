use serde::{Deserialize, Serialize};

use crate::models::{IngredientCategory, Unit};

/// One stocked ingredient.
///
/// Identity is the case-insensitive name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    #[serde(rename = "item")]
    pub name: String,

    #[serde(default)]
    pub quantity: f64,

    #[serde(default)]
    pub unit: Unit,

    #[serde(default)]
    pub category: IngredientCategory,

    /// Package weight as printed on the receipt, e.g. `400 克`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl InventoryEntry {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: Unit,
        category: IngredientCategory,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            category,
            weight: None,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Partial update applied to a stocked item. The name never changes.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdate {
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub category: Option<IngredientCategory>,
    pub weight: Option<String>,
}
