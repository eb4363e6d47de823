//! Repository Layer
//!
//! Data access abstractions and the SQLite implementations.

mod db;
mod item_repo;
mod meal_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{Db, SharedConnection};
pub use item_repo::SqliteShoppingItemStore;
pub use meal_repo::SqlitePlannedMealStore;
pub use traits::{PlannedMealStore, ShoppingItemStore};
