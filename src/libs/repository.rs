//! SQLite-backed task source.
//!
//! [`TasksRepository`] answers `get_tasks` from the local tasks table. Reads run
//! on the blocking pool of the runtime `get_tasks` is called from, so the
//! callback fires on a worker thread; outside a runtime the read happens inline.

use super::source::{LoadTasksCallback, SourceError, TaskSource};
use super::task::{Task, TaskFilter};
use crate::db::db::DB_FILE_NAME;
use crate::db::tasks::Tasks;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Task source reading the tasks table of a database in the data directory.
#[derive(Debug, Clone)]
pub struct TasksRepository {
    db_file_name: String,
}

impl TasksRepository {
    /// Repository over `db_file_name` in the data directory.
    pub fn new(db_file_name: &str) -> Self {
        TasksRepository {
            db_file_name: db_file_name.to_string(),
        }
    }
}

impl Default for TasksRepository {
    fn default() -> Self {
        Self::new(DB_FILE_NAME)
    }
}

impl TaskSource for TasksRepository {
    fn get_tasks(&self, callback: Box<dyn LoadTasksCallback>) {
        let db_file_name = self.db_file_name.clone();
        match Handle::try_current() {
            Ok(runtime) => {
                // The join handle is not needed; the callback carries the outcome
                let _ = runtime.spawn_blocking(move || deliver(load_tasks(&db_file_name), callback));
            }
            Err(_) => deliver(load_tasks(&db_file_name), callback),
        }
    }
}

fn load_tasks(db_file_name: &str) -> Result<Vec<Task>, SourceError> {
    let tasks = Tasks::open(db_file_name)?.fetch(TaskFilter::All)?;
    debug!(count = tasks.len(), db = db_file_name, "tasks read from storage");
    Ok(tasks)
}

fn deliver(result: Result<Vec<Task>, SourceError>, callback: Box<dyn LoadTasksCallback>) {
    if let Err(e) = &result {
        warn!(error = %e, "task storage unavailable");
    }
    callback.deliver(result.into());
}
