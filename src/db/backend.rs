//! Raw key-value backends behind [`Db`](super::db::Db).
//!
//! A backend stores one string value per collection key and knows nothing
//! about records. `SqliteBackend` is the durable store used by the
//! application; `MemoryBackend` keeps values in process and can enforce a
//! byte quota to reproduce "storage full" write failures.

use super::db::Collection;
use crate::libs::error::{GtdError, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

const SCHEMA_STORAGE: &str = "CREATE TABLE IF NOT EXISTS storage (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
);";
const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

pub trait Backend {
    /// Returns the raw value stored for `collection`, `None` if the key is absent.
    fn read(&self, collection: Collection) -> Result<Option<String>>;

    /// Replaces the raw value stored for `collection` in a single write.
    fn write(&self, collection: Collection, value: &str) -> Result<()>;
}

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| GtdError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::init(conn, path)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| GtdError::Open {
            path: ":memory:".into(),
            reason: e.to_string(),
        })?;

        Self::init(conn, Path::new(":memory:"))
    }

    fn init(conn: Connection, path: &Path) -> Result<Self> {
        conn.execute(SCHEMA_STORAGE, []).map_err(|e| GtdError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self { conn })
    }
}

impl Backend for SqliteBackend {
    fn read(&self, collection: Collection) -> Result<Option<String>> {
        self.conn
            .query_row(SELECT_VALUE, params![collection.key()], |row| row.get(0))
            .optional()
            .map_err(|e| GtdError::read(collection, e))
    }

    fn write(&self, collection: Collection, value: &str) -> Result<()> {
        self.conn
            .execute(UPSERT_VALUE, params![collection.key(), value])
            .map_err(|e| GtdError::write(collection, e))?;

        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    values: RefCell<HashMap<&'static str, String>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any write that would push the total stored bytes past `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Pre-populates `collection` with a raw value, bypassing the quota.
    pub fn with_value(self, collection: Collection, value: impl Into<String>) -> Self {
        self.values.borrow_mut().insert(collection.key(), value.into());
        self
    }

    /// Total bytes currently stored across all keys.
    pub fn used(&self) -> usize {
        self.values.borrow().values().map(String::len).sum()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, collection: Collection) -> Result<Option<String>> {
        Ok(self.values.borrow().get(collection.key()).cloned())
    }

    fn write(&self, collection: Collection, value: &str) -> Result<()> {
        let mut values = self.values.borrow_mut();

        if let Some(quota) = self.quota {
            let others: usize = values
                .iter()
                .filter(|(key, _)| **key != collection.key())
                .map(|(_, v)| v.len())
                .sum();
            if others + value.len() > quota {
                return Err(GtdError::write(
                    collection,
                    format!("quota of {} bytes exceeded", quota),
                ));
            }
        }

        values.insert(collection.key(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_write_replaces_value() {
        let backend = SqliteBackend::in_memory().unwrap();
        assert_eq!(backend.read(Collection::Tasks).unwrap(), None);

        backend.write(Collection::Tasks, "[1]").unwrap();
        backend.write(Collection::Tasks, "[2]").unwrap();

        assert_eq!(backend.read(Collection::Tasks).unwrap().as_deref(), Some("[2]"));
        assert_eq!(backend.read(Collection::Projects).unwrap(), None);
    }

    #[test]
    fn memory_quota_counts_other_keys() {
        let backend = MemoryBackend::new().with_quota(10);
        backend.write(Collection::Projects, "12345").unwrap();
        backend.write(Collection::Tasks, "12345").unwrap();
        // replacing a value only counts the new length
        backend.write(Collection::Tasks, "abcde").unwrap();

        let err = backend.write(Collection::Tasks, "123456").unwrap_err();
        assert!(matches!(err, GtdError::StorageWrite { collection: Collection::Tasks, .. }));
        assert_eq!(backend.read(Collection::Tasks).unwrap().as_deref(), Some("abcde"));
        assert_eq!(backend.used(), 10);
    }
}
