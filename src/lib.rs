//! Feira Core
//!
//! Ingredient aggregation and shopping-list group engine: takes the recipes
//! planned across one or more days, normalizes ingredient identity and
//! measurement units, merges duplicates into single line items and manages
//! the resulting list as a named, uniquely-identified group with a lifecycle
//! (creation, duplicate-name detection, renaming, completion, deletion).
//!
//! Layered architecture:
//! - domain: Core entities and business rules (pure, no I/O)
//! - repository: Data access abstractions and SQLite implementations
//! - service: The operations a view layer calls

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{
    aggregate::aggregate, normalize::normalize, units, AggregatedIngredient, DomainError,
    DomainResult, GroupKey, GroupState, GroupTarget, IngredientTriple, Period, PlannedMeal,
    ShoppingGroup, ShoppingItem,
};
pub use repository::{
    Db, PlannedMealStore, ShoppingItemStore, SqlitePlannedMealStore, SqliteShoppingItemStore,
};
pub use service::{
    AddItemOutcome, ChecklistBuilder, CreateOutcome, RecipeSource, RenameOutcome,
    ShoppingGroupManager,
};
