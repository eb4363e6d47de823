//! Shopping Item Repository
//!
//! SQLite-backed implementation of `ShoppingItemStore`.

use async_trait::async_trait;
use rusqlite::{params, Row};

use super::db::SharedConnection;
use super::traits::ShoppingItemStore;
use crate::domain::{DomainError, DomainResult, GroupKey, ShoppingItem};

const ITEM_COLUMNS: &str =
    "id, group_key, name, quantity, unit, purchased, price_informed, concluded";

pub struct SqliteShoppingItemStore {
    conn: SharedConnection,
}

impl SqliteShoppingItemStore {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ShoppingItemStore for SqliteShoppingItemStore {
    async fn insert_items(&self, items: &[ShoppingItem]) -> DomainResult<Vec<ShoppingItem>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // One unit of work: either every row lands or none does
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut inserted = Vec::with_capacity(items.len());
        for item in items {
            tx.execute(
                "INSERT INTO shopping_items (group_key, name, quantity, unit, purchased, price_informed, concluded)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![
                    item.group_key.encode(),
                    item.name,
                    item.quantity,
                    item.unit,
                    item.purchased as i32,
                    item.price_informed,
                    item.concluded as i32,
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

            let mut row = item.clone();
            row.id = tx.last_insert_rowid();
            inserted.push(row);
        }

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(inserted)
    }

    async fn list_by_group(&self, key: &GroupKey) -> DomainResult<Vec<ShoppingItem>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM shopping_items WHERE group_key = ? ORDER BY id",
                ITEM_COLUMNS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![key.encode()], row_to_item)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        collect_items(rows)
    }

    async fn list_group_keys(&self, concluded: Option<bool>) -> DomainResult<Vec<GroupKey>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let query = match concluded {
            None => "SELECT DISTINCT group_key FROM shopping_items".to_string(),
            Some(flag) => format!(
                "SELECT DISTINCT group_key FROM shopping_items WHERE concluded = {}",
                flag as i32
            ),
        };

        let mut stmt = conn
            .prepare(&query)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let raw_keys = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut keys = Vec::new();
        for raw in raw_keys {
            let raw = raw.map_err(|e| DomainError::Internal(e.to_string()))?;
            let key = GroupKey::decode(&raw)
                .ok_or_else(|| DomainError::Internal(format!("Corrupt group key: {}", raw)))?;
            keys.push(key);
        }
        Ok(keys)
    }

    async fn find_item(&self, id: i64) -> DomainResult<Option<ShoppingItem>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM shopping_items WHERE id = ?",
                ITEM_COLUMNS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![id], row_to_item)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next() {
            Some(row) => Ok(Some(row.map_err(map_row_err)?)),
            None => Ok(None),
        }
    }

    async fn update_item(&self, item: &ShoppingItem) -> DomainResult<ShoppingItem> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE shopping_items SET name = ?, quantity = ?, unit = ?, purchased = ?, price_informed = ? WHERE id = ?",
            params![
                item.name,
                item.quantity,
                item.unit,
                item.purchased as i32,
                item.price_informed,
                item.id,
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(item.clone())
    }

    async fn delete_item(&self, id: i64) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM shopping_items WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    async fn move_group(&self, from: &GroupKey, to: &GroupKey) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // Single statement, so the move is all-or-nothing
        conn.execute(
            "UPDATE shopping_items SET group_key = ? WHERE group_key = ?",
            params![to.encode(), from.encode()],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    async fn delete_group(&self, key: &GroupKey) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // Deleting an absent group matches zero rows; idempotent by design
        conn.execute(
            "DELETE FROM shopping_items WHERE group_key = ?",
            params![key.encode()],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    async fn mark_concluded(&self, key: &GroupKey) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE shopping_items SET concluded = 1 WHERE group_key = ?",
            params![key.encode()],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Convert a database row to a ShoppingItem
fn row_to_item(row: &Row<'_>) -> rusqlite::Result<ShoppingItem> {
    let raw_key: String = row.get(1)?;
    let group_key = GroupKey::decode(&raw_key).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("Corrupt group key: {}", raw_key).into(),
        )
    })?;

    Ok(ShoppingItem {
        id: row.get(0)?,
        group_key,
        name: row.get(2)?,
        quantity: row.get(3)?,
        unit: row.get(4)?,
        purchased: row.get::<_, i32>(5)? != 0,
        price_informed: row.get(6)?,
        concluded: row.get::<_, i32>(7)? != 0,
    })
}

fn collect_items(
    rows: impl Iterator<Item = rusqlite::Result<ShoppingItem>>,
) -> DomainResult<Vec<ShoppingItem>> {
    let mut items = Vec::new();
    for row in rows {
        items.push(row.map_err(map_row_err)?);
    }
    Ok(items)
}

fn map_row_err(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}
