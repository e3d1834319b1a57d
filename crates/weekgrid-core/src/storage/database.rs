//! SQLite-backed key-value store.
//!
//! The schedule mapping is kept as one JSON document under
//! [`SCHEDULE_KEY`], so every save replaces it in a single statement.

use std::path::Path;

use rusqlite::{params, Connection};

use super::{data_dir, SchedulePersistence};
use crate::error::StorageError;
use crate::schedule::RecordMap;

/// kv key holding the serialized schedule mapping.
pub const SCHEDULE_KEY: &str = "scheduleData";

/// SQLite database with a single `kv` table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data dir>/weekgrid.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(data_dir()?.join("weekgrid.db"))
    }

    /// Open (or create) the database at an explicit path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| StorageError::WriteFailed(format!("migration: {e}")))?;
        tracing::debug!(path = %path.display(), "opened schedule database");
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()
            .map_err(|e| StorageError::WriteFailed(format!("migration: {e}")))?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a key. Returns whether it existed.
    pub fn kv_delete(&self, key: &str) -> Result<bool, rusqlite::Error> {
        let n = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(n > 0)
    }
}

impl SchedulePersistence for Database {
    fn load(&self) -> Result<Option<RecordMap>, StorageError> {
        let Some(json) = self
            .kv_get(SCHEDULE_KEY)
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?
        else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn save(&self, records: &RecordMap) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(records).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        self.kv_set(SCHEDULE_KEY, &json)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}
