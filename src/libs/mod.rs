//! Core library modules for gtd.
//!
//! - **Model**: [`task`], [`project`] and the [`error`] type
//! - **Views**: [`query`] projections and date [`formatter`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: terminal tables in [`view`]
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use gtd::libs::query::today_tasks;
//! use gtd::libs::task::Task;
//!
//! let now = Utc::now();
//! let tasks = vec![Task::new("Plan the week", Some("Work"), Some(now), now)];
//! assert_eq!(today_tasks(&tasks, &now).len(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod project;
pub mod query;
pub mod task;
pub mod view;
