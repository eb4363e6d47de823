//! Domain Layer
//!
//! Contains all domain entities and the pure business rules (normalization,
//! unit conversion, aggregation, period selection).
//! This layer has NO external dependencies (except serde for serialization
//! and chrono for key minting).

mod entity;
mod group;
mod ingredient;
mod planned_meal;
mod shopping_item;

pub mod aggregate;
pub mod normalize;
pub mod units;

pub use entity::{DomainError, DomainResult, Entity};
pub use group::{GroupKey, GroupState, GroupTarget, ShoppingGroup};
pub use ingredient::{AggregatedIngredient, IngredientTriple};
pub use planned_meal::{select_meals, Period, PlannedMeal};
pub use shopping_item::ShoppingItem;
