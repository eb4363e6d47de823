//! Database Connection and Setup
//!
//! Manages the SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Shared connection handle passed to the repositories
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
pub struct Db {
    conn: SharedConnection,
}

impl Db {
    /// Open (or create) the database at the given path and run migrations
    pub fn open(path: &Path) -> DomainResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// Clone the shared connection handle for a repository
    pub fn connection(&self) -> SharedConnection {
        Arc::clone(&self.conn)
    }
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS shopping_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            group_key TEXT NOT NULL,
            name TEXT NOT NULL,
            quantity REAL NOT NULL DEFAULT 1,
            unit TEXT NOT NULL DEFAULT '',
            purchased INTEGER NOT NULL DEFAULT 0,
            price_informed REAL,
            concluded INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Every item operation is scoped by group key
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_shopping_items_group ON shopping_items(group_key)",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS planned_meals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            day TEXT NOT NULL,
            meal_type TEXT NOT NULL,
            recipe_id TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_planned_meals_user ON planned_meals(user_id)",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(())
}
