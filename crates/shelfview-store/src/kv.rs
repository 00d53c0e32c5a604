use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Persistence Design Rationale
//
// Why one opaque value per key (not one row per item)?
// - The snapshot format is the external contract: a JSON array of flat
//   records under a collection-specific key
// - Readers apply schema-on-read with per-item recovery, so the table
//   never needs migrating when item fields evolve
// - Matches the localStorage semantics the collections were built on:
//   whole-snapshot write after every mutation, whole-snapshot read at start

/// String-keyed snapshot store backed by SQLite.
///
/// Get/set-by-key string semantics; each logical collection persists its
/// full serialized snapshot under its own key.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let current_version: i32 =
            self.conn
                .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if current_version != 0 && current_version != SCHEMA_VERSION {
            self.conn
                .execute_batch("DROP TABLE IF EXISTS snapshots;")?;
        }

        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;

        self.conn
            .execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM snapshots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO snapshots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = ?3
            "#,
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM snapshots WHERE key = ?1", [key])?;
        Ok(affected > 0)
    }

    /// All snapshot keys in lexicographic order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM snapshots ORDER BY key ASC")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()?;
        Ok(keys)
    }
}
