use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};

use super::{PreferenceStore, StoreError};

/// Durable preference store backed by a single sqlite table.
///
/// Individual reads and writes are serialized through the connection mutex;
/// multi-key sequences (like the sort-exclusivity double write) are not
/// wrapped in a transaction.
pub struct SqlitePreferenceStore {
    conn: Mutex<Connection>,
}

impl SqlitePreferenceStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(&path).map_err(|e| StoreError::Read {
            key: path.as_ref().display().to_string(),
            reason: e.to_string(),
        })?;
        Self::with_connection(conn)
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Read {
            key: ":memory:".to_string(),
            reason: e.to_string(),
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            );
            "#,
        )
        .map_err(|e| StoreError::Write {
            key: "preferences".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get_flag(&self, key: &str) -> Result<Option<bool>, StoreError> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [key],
            |row| row.get::<_, i64>(0),
        )
        .optional()
        .map(|v| v.map(|n| n != 0))
        .map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn set_flag(&self, key: &str, value: bool) -> Result<(), StoreError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value as i64],
        )
        .map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
