//! Ingredient Types
//!
//! The ephemeral input row pulled from a recipe and the display-ready merged
//! line item produced by aggregation.

use serde::{Deserialize, Serialize};

/// A raw (name, quantity, unit) row read from a recipe's ingredient list.
///
/// Ephemeral: produced by the recipe source, destroyed once aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientTriple {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl IngredientTriple {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// A single display-ready line item produced by merging one or more
/// same-identity, same-base-unit triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    /// Normalized-name key, unit-suffixed when the same name appears with
    /// incompatible base units
    pub id: String,
    /// First-seen original spelling, trimmed
    pub display_name: String,
    /// Display-unit quantity, rounded to 2 decimals
    pub quantity: f64,
    /// Display unit
    pub unit: String,
    /// Include-by-default flag; cleared only by the user's deselect action
    pub checked: bool,
}
