//! Planned Meal Repository
//!
//! SQLite-backed implementation of `PlannedMealStore`.

use async_trait::async_trait;
use rusqlite::{params, Row};

use super::db::SharedConnection;
use super::traits::PlannedMealStore;
use crate::domain::{DomainError, DomainResult, PlannedMeal};

pub struct SqlitePlannedMealStore {
    conn: SharedConnection,
}

impl SqlitePlannedMealStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl PlannedMealStore for SqlitePlannedMealStore {
    async fn insert(&self, meal: &PlannedMeal) -> DomainResult<PlannedMeal> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO planned_meals (user_id, day, meal_type, recipe_id) VALUES (?, ?, ?, ?)",
            params![meal.user_id, meal.day, meal.meal_type, meal.recipe_id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut row = meal.clone();
        row.id = conn.last_insert_rowid();
        Ok(row)
    }

    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<PlannedMeal>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, user_id, day, meal_type, recipe_id FROM planned_meals WHERE user_id = ? ORDER BY id",
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id], row_to_meal)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut meals = Vec::new();
        for row in rows {
            meals.push(row.map_err(|e| DomainError::Internal(e.to_string()))?);
        }
        Ok(meals)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM planned_meals WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

fn row_to_meal(row: &Row<'_>) -> rusqlite::Result<PlannedMeal> {
    Ok(PlannedMeal {
        id: row.get(0)?,
        user_id: row.get(1)?,
        day: row.get(2)?,
        meal_type: row.get(3)?,
        recipe_id: row.get(4)?,
    })
}
