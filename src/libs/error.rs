//! Error types for the gtd core.
//!
//! Repository and store operations return [`Result`] with a [`GtdError`].
//! The command layer wraps these in `anyhow` at the boundary.

use crate::db::db::Collection;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the persistence store and the repositories.
#[derive(Debug, Error)]
pub enum GtdError {
    /// The backing database could not be opened or initialized.
    #[error("failed to open store at {}: {reason}", .path.display())]
    Open { path: PathBuf, reason: String },

    /// Stored content could not be read or parsed.
    ///
    /// `Db::load` recovers from this by returning an empty collection, so it
    /// never reaches callers of the repositories.
    #[error("failed to read {collection} collection: {reason}")]
    StorageRead { collection: Collection, reason: String },

    /// The backend rejected a write. Nothing was committed.
    #[error("failed to write {collection} collection: {reason}")]
    StorageWrite { collection: Collection, reason: String },

    /// A record was rejected before it reached the store.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl GtdError {
    pub fn read(collection: Collection, reason: impl ToString) -> Self {
        Self::StorageRead {
            collection,
            reason: reason.to_string(),
        }
    }

    pub fn write(collection: Collection, reason: impl ToString) -> Self {
        Self::StorageWrite {
            collection,
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GtdError>;
