//! # gtd - Getting Things Done
//!
//! A personal task tracker: tasks with optional projects and due dates,
//! projects as named groupings, and derived views for today, upcoming tasks
//! grouped by date, recent tasks and dashboard counts.
//!
//! ## Layout
//!
//! - [`db`]: persistence store handle, task and project repositories, seeding
//! - [`libs`]: data model, view queries, formatting, configuration, messages
//! - [`commands`]: the `gtd` command-line front-end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gtd::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
