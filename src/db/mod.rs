//! SQLite persistence for the task list.
//!
//! ```rust,no_run
//! use todostat::db::tasks::Tasks;
//! use todostat::libs::task::{Task, TaskFilter};
//!
//! let mut tasks = Tasks::new()?;
//! tasks.insert(&Task::new("Review code", "Check PR #123"))?;
//! let active = tasks.fetch(TaskFilter::Active)?;
//! # Ok::<(), todostat::libs::source::SourceError>(())
//! ```

/// Connection to the database file in the data directory.
pub mod db;

/// Task table operations: insert, fetch, complete/activate, delete.
pub mod tasks;
