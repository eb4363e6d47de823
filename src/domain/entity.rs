//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all persisted domain entities,
//! plus the error taxonomy shared by every layer.

use serde::{Deserialize, Serialize};

/// Core trait for all persisted domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Lifecycle violations get their own variants so callers can render an
/// accurate message instead of a generic failure. Duplicate-name conflicts
/// are NOT errors; they are outcome values (see the service layer), because
/// they are a recoverable decision point, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// The requested period matched no planned meals; nothing to aggregate
    EmptySelection,
    /// Mutation attempted on a concluded (read-only) group
    GroupConcluded(String),
    /// Completion attempted while some items are still unpurchased
    NotAllPurchased(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::EmptySelection => write!(f, "No planned meals in the selected period"),
            DomainError::GroupConcluded(key) => {
                write!(f, "Group is concluded and read-only: {}", key)
            }
            DomainError::NotAllPurchased(key) => {
                write!(f, "Group has unpurchased items: {}", key)
            }
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
