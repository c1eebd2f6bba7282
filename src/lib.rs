//! # todostat - statistics for a to-do list
//!
//! Loads tasks from a task source, derives whether there is anything active
//! left to do, and publishes the result through observable fields that a
//! screen (or any other observer) can bind to.
//!
//! ## Features
//!
//! - **Task sources**: callback-based [`libs::source::TaskSource`] contract with
//!   an in-memory and a SQLite-backed implementation
//! - **View-model**: [`libs::view_model::StatsViewModel`] turning load outcomes
//!   into `empty` / `error` flags and task counts
//! - **Observables**: listener and `tokio::sync::watch` based change notification
//! - **CLI**: task management and a statistics screen in the terminal
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todostat::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
