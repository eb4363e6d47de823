//! Service Layer
//!
//! The operations consumed by a view layer: checklist building from planned
//! meals and the shopping-group lifecycle.

mod checklist;
mod group_manager;

pub use checklist::{ChecklistBuilder, RecipeSource};
pub use group_manager::{AddItemOutcome, CreateOutcome, RenameOutcome, ShoppingGroupManager};
