//! Repository Layer - Core Traits
//!
//! Abstract interfaces for the persistent store. The core only needs row
//! inserts, group-key scoped selects/updates/deletes and the planned-meal
//! read path; implementations can use SQLite, in-memory, a remote table, etc.
//! Each operation is a single atomic-or-failed unit of work; no partial
//! commit is ever observable through these traits.

use async_trait::async_trait;

use crate::domain::{DomainResult, GroupKey, PlannedMeal, ShoppingItem};

/// Store for persisted shopping items, keyed by their owning group
#[async_trait]
pub trait ShoppingItemStore: Send + Sync {
    /// Insert a batch of items as one unit of work; returns them with
    /// assigned row ids
    async fn insert_items(&self, items: &[ShoppingItem]) -> DomainResult<Vec<ShoppingItem>>;

    /// All items belonging to a group
    async fn list_by_group(&self, key: &GroupKey) -> DomainResult<Vec<ShoppingItem>>;

    /// Distinct group keys, optionally filtered by concluded state
    /// (None = all, Some(false) = active, Some(true) = concluded history)
    async fn list_group_keys(&self, concluded: Option<bool>) -> DomainResult<Vec<GroupKey>>;

    /// Find a single item by row id
    async fn find_item(&self, id: i64) -> DomainResult<Option<ShoppingItem>>;

    /// Update an item's mutable fields in place
    async fn update_item(&self, item: &ShoppingItem) -> DomainResult<ShoppingItem>;

    /// Delete a single item by row id
    async fn delete_item(&self, id: i64) -> DomainResult<()>;

    /// Move every item from one group key to another as a single logical
    /// operation (used by rename; partial moves are not observable)
    async fn move_group(&self, from: &GroupKey, to: &GroupKey) -> DomainResult<()>;

    /// Delete every item belonging to a group; idempotent
    async fn delete_group(&self, key: &GroupKey) -> DomainResult<()>;

    /// Set the concluded flag on every item of a group
    async fn mark_concluded(&self, key: &GroupKey) -> DomainResult<()>;
}

/// Read/write store for the planned-meals table
#[async_trait]
pub trait PlannedMealStore: Send + Sync {
    /// Persist a planned meal; returns it with the assigned row id
    async fn insert(&self, meal: &PlannedMeal) -> DomainResult<PlannedMeal>;

    /// All planned meals for a user, across all days
    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<PlannedMeal>>;

    /// Remove a planned meal by row id
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
