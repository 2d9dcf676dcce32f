use super::backend::{Backend, SqliteBackend};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{GtdError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;

pub const DB_FILE_NAME: &str = "gtd.db";

/// The two top-level record sets kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tasks,
    Projects,
}

impl Collection {
    /// Storage key of the collection.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Tasks => "gtd-tasks",
            Collection::Projects => "gtd-projects",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Tasks => write!(f, "tasks"),
            Collection::Projects => write!(f, "projects"),
        }
    }
}

/// Handle to the persistence store.
///
/// Each collection is stored as one JSON array under its own key. Reads are
/// lenient: a missing key, a failed read or content that does not parse all
/// yield an empty collection. Writes replace the whole collection with a
/// single backend write and report failures to the caller.
///
/// Access is read-modify-write without locking. Two writers interleaving
/// load/save on the same collection lose updates (last save wins), so a
/// store handle is meant to be driven by a single actor.
pub struct Db {
    backend: Box<dyn Backend>,
}

impl Db {
    /// Opens the SQLite store in the platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| GtdError::Open {
                path: DB_FILE_NAME.into(),
                reason: e.to_string(),
            })?;

        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        Ok(Self::with_backend(SqliteBackend::open(path)?))
    }

    pub fn in_memory() -> Result<Db> {
        Ok(Self::with_backend(SqliteBackend::in_memory()?))
    }

    pub fn with_backend(backend: impl Backend + 'static) -> Db {
        Db {
            backend: Box::new(backend),
        }
    }

    /// Loads every record of `collection` in stored order.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let raw = match self.backend.read(collection) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(%collection, error = %e, "read failed, treating collection as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                let e = GtdError::read(collection, e);
                tracing::warn!(%collection, error = %e, "malformed content, treating collection as empty");
                Vec::new()
            }
        }
    }

    /// Replaces the stored `collection` with `records`.
    pub fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records).map_err(|e| GtdError::write(collection, e))?;
        self.backend.write(collection, &raw)?;
        tracing::debug!(%collection, records = records.len(), "collection saved");

        Ok(())
    }
}
