//! Shopping Item Entity
//!
//! A persisted line item owned by exactly one shopping group. Deleted when
//! the item is removed or the group is deleted; quantity/price mutations
//! happen in place, scoped to the owning group.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::group::GroupKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Row id assigned by the store (0 before first insert)
    pub id: i64,
    pub group_key: GroupKey,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub purchased: bool,
    /// Price the user reported at purchase time, if any
    pub price_informed: Option<f64>,
    /// Persisted redundantly per row; the completion gate derives from the
    /// purchased flags, never from this
    pub concluded: bool,
}

impl ShoppingItem {
    pub fn new(group_key: GroupKey, name: String, quantity: f64, unit: String) -> Self {
        Self {
            id: 0,
            group_key,
            name,
            quantity,
            unit,
            purchased: false,
            price_informed: None,
            concluded: false,
        }
    }
}

impl Entity for ShoppingItem {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
