//! Planned Meal Entity and Period Selector
//!
//! A planned meal binds a recipe to a day slot in the user's plan. The
//! period selector decides which planned meals feed the aggregator and which
//! quantity multiplier applies. The currently selected day is an explicit
//! parameter, never ambient state, so the selector is testable on its own.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// A recipe planned for a given day and meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub id: i64,
    pub user_id: String,
    /// Day name as stored by the plan ("segunda", "terça", ...)
    pub day: String,
    /// Meal slot ("café", "almoço", "jantar", ...)
    pub meal_type: String,
    pub recipe_id: String,
}

impl PlannedMeal {
    pub fn new(
        user_id: impl Into<String>,
        day: impl Into<String>,
        meal_type: impl Into<String>,
        recipe_id: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            user_id: user_id.into(),
            day: day.into(),
            meal_type: meal_type.into(),
            recipe_id: recipe_id.into(),
        }
    }
}

impl Entity for PlannedMeal {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Aggregation window requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "weekly" => Period::Weekly,
            "monthly" => Period::Monthly,
            _ => Period::Daily,
        }
    }

    /// Quantity multiplier applied to triples before aggregation.
    ///
    /// Monthly is a fixed week-times-4 approximation, not calendar-accurate.
    /// Changing it changes user-visible totals, so it stays as-is.
    pub fn multiplier(&self) -> f64 {
        match self {
            Period::Daily | Period::Weekly => 1.0,
            Period::Monthly => 4.0,
        }
    }
}

/// Filter the planned meals for the requested period.
///
/// `Daily` keeps only entries whose day equals `selected_day`; `Weekly` and
/// `Monthly` keep everything. Returns the matching meals and the period's
/// quantity multiplier, or `EmptySelection` when nothing matches so the
/// caller can show a message instead of silently aggregating an empty set.
pub fn select_meals<'a>(
    meals: &'a [PlannedMeal],
    period: Period,
    selected_day: &str,
) -> DomainResult<(Vec<&'a PlannedMeal>, f64)> {
    let selected: Vec<&PlannedMeal> = match period {
        Period::Daily => meals.iter().filter(|m| m.day == selected_day).collect(),
        Period::Weekly | Period::Monthly => meals.iter().collect(),
    };

    if selected.is_empty() {
        return Err(DomainError::EmptySelection);
    }

    Ok((selected, period.multiplier()))
}
