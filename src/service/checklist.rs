//! Checklist Builder
//!
//! Turns the user's planned meals into the aggregated, display-ready
//! checklist: period selection, ingredient pull from the recipe source,
//! input validation, quantity multiplication, aggregation.

use async_trait::async_trait;

use crate::domain::aggregate::aggregate;
use crate::domain::normalize::normalize;
use crate::domain::{
    select_meals, AggregatedIngredient, DomainError, DomainResult, IngredientTriple, Period,
};
use crate::repository::PlannedMealStore;

/// Read-only provider of a recipe's ingredient list.
///
/// May be backed by a static catalog or a per-user custom-recipe store; the
/// aggregation pipeline is agnostic to which.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn ingredients_for(&self, recipe_id: &str) -> DomainResult<Vec<IngredientTriple>>;
}

pub struct ChecklistBuilder<M: PlannedMealStore, R: RecipeSource> {
    meals: M,
    recipes: R,
}

impl<M: PlannedMealStore, R: RecipeSource> ChecklistBuilder<M, R> {
    pub fn new(meals: M, recipes: R) -> Self {
        Self { meals, recipes }
    }

    /// Build the aggregated checklist for a user and period.
    ///
    /// The selected day is an explicit parameter (only consulted for the
    /// daily period). The period multiplier is applied to every triple
    /// BEFORE aggregation. Ingredients with empty names or non-positive
    /// quantities are upstream data defects and rejected here, before the
    /// aggregator ever sees them.
    pub async fn build(
        &self,
        user_id: &str,
        period: Period,
        selected_day: &str,
    ) -> DomainResult<Vec<AggregatedIngredient>> {
        let all_meals = self.meals.list_for_user(user_id).await?;
        let (selected, multiplier) = select_meals(&all_meals, period, selected_day)?;

        let mut triples = Vec::new();
        for meal in &selected {
            let ingredients = self.recipes.ingredients_for(&meal.recipe_id).await?;
            for mut triple in ingredients {
                if normalize(&triple.name).is_empty() {
                    return Err(DomainError::InvalidInput(format!(
                        "Recipe {} has an ingredient with an empty name",
                        meal.recipe_id
                    )));
                }
                if !triple.quantity.is_finite() || triple.quantity <= 0.0 {
                    return Err(DomainError::InvalidInput(format!(
                        "Recipe {} has a non-positive quantity for {}",
                        meal.recipe_id, triple.name
                    )));
                }
                triple.quantity *= multiplier;
                triples.push(triple);
            }
        }

        if triples.is_empty() {
            return Err(DomainError::EmptySelection);
        }

        log::debug!(
            "Aggregating {} triples from {} meals ({})",
            triples.len(),
            selected.len(),
            period.as_str()
        );
        Ok(aggregate(&triples))
    }
}
