//! Persistence layer for gtd.
//!
//! Tasks and projects are kept as two JSON arrays in a key-value store, one
//! key per collection. The store handle ([`db::Db`]) is created once and
//! borrowed by the repositories, which load a whole collection, change it in
//! memory and save it back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use gtd::db::{db::Db, projects::Projects, tasks::Tasks};
//! use gtd::libs::task::Task;
//!
//! let db = Db::new()?;
//! Projects::new(&db).insert("Work")?;
//! let id = Tasks::new(&db).insert(&Task::new("Write report", Some("Work"), None, Utc::now()))?;
//! # Ok::<(), gtd::libs::error::GtdError>(())
//! ```

/// Raw key-value backends (SQLite and in-memory).
pub mod backend;

/// Store handle, collections and the lenient load / strict save policy.
pub mod db;

/// Project CRUD and the Inbox cascade on deletion.
pub mod projects;

/// One-time sample data for an empty store.
pub mod seed;

/// Task CRUD by position and by stable id.
pub mod tasks;
