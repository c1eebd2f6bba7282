//! Core library modules for todostat.
//!
//! - **Tasks**: task records and the sources that supply them
//! - **Presentation**: statistics derivation, observable fields, the view-model
//!   and the screen hosting it
//! - **Infrastructure**: configuration, data directory, messages, console output
//!
//! ```rust
//! use std::sync::Arc;
//! use todostat::libs::source::InMemoryTaskSource;
//! use todostat::libs::task::Task;
//! use todostat::libs::view_model::StatsViewModel;
//!
//! let source = InMemoryTaskSource::new(vec![Task::new("Title1", "Description1").completed()]);
//! let view_model = StatsViewModel::new(Arc::new(source));
//! view_model.load_statistics();
//! assert!(view_model.empty.get());
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod observable;
pub mod repository;
pub mod screen;
pub mod source;
pub mod statistics;
pub mod task;
pub mod view;
pub mod view_model;
