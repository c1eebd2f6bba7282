//! Task sources and the load callback contract.
//!
//! A [`TaskSource`] hands its task collection to a [`LoadTasksCallback`] at some
//! later point, on whatever thread suits it. The callback is consumed by the
//! outcome it receives, so a source can deliver at most one outcome per request.
//!
//! Code that prefers futures over callbacks can use [`fetch_tasks`], which
//! bridges the callback through a oneshot channel into a [`LoadResult`].
//!
//! ```rust,no_run
//! use todostat::libs::source::{fetch_tasks, InMemoryTaskSource, LoadResult};
//! use todostat::libs::task::Task;
//!
//! # async fn demo() {
//! let source = InMemoryTaskSource::new(vec![Task::new("Title1", "Description1")]);
//! match fetch_tasks(&source).await {
//!     LoadResult::Loaded(tasks) => println!("{} tasks", tasks.len()),
//!     LoadResult::Unavailable => println!("no data"),
//! }
//! # }
//! ```

use super::task::Task;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;

/// Failures raised while producing a task collection.
///
/// The view-model only ever sees the outcome as "unavailable"; the detailed
/// variants exist for logging and for direct users of the storage layer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("task storage failed: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("data directory is not accessible: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one `get_tasks` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Loaded(Vec<Task>),
    Unavailable,
}

impl LoadResult {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadResult::Unavailable)
    }
}

impl From<Result<Vec<Task>, SourceError>> for LoadResult {
    fn from(result: Result<Vec<Task>, SourceError>) -> Self {
        match result {
            Ok(tasks) => LoadResult::Loaded(tasks),
            Err(_) => LoadResult::Unavailable,
        }
    }
}

/// Receiver of a single load outcome.
pub trait LoadTasksCallback: Send {
    fn on_tasks_loaded(self: Box<Self>, tasks: Vec<Task>);

    fn on_data_not_available(self: Box<Self>);

    /// Routes a [`LoadResult`] to the matching method.
    fn deliver(self: Box<Self>, result: LoadResult) {
        match result {
            LoadResult::Loaded(tasks) => self.on_tasks_loaded(tasks),
            LoadResult::Unavailable => self.on_data_not_available(),
        }
    }
}

/// Supplies the full task collection asynchronously.
pub trait TaskSource: Send + Sync {
    fn get_tasks(&self, callback: Box<dyn LoadTasksCallback>);
}

impl<S: TaskSource + ?Sized> TaskSource for Arc<S> {
    fn get_tasks(&self, callback: Box<dyn LoadTasksCallback>) {
        (**self).get_tasks(callback)
    }
}

impl LoadTasksCallback for oneshot::Sender<LoadResult> {
    fn on_tasks_loaded(self: Box<Self>, tasks: Vec<Task>) {
        let _ = (*self).send(LoadResult::Loaded(tasks));
    }

    fn on_data_not_available(self: Box<Self>) {
        let _ = (*self).send(LoadResult::Unavailable);
    }
}

/// Requests tasks from `source` and waits for the outcome.
///
/// A source that drops the callback without invoking it counts as unavailable.
pub async fn fetch_tasks<S: TaskSource + ?Sized>(source: &S) -> LoadResult {
    let (tx, rx) = oneshot::channel();
    source.get_tasks(Box::new(tx));
    rx.await.unwrap_or(LoadResult::Unavailable)
}

/// Task source backed by a vector in memory.
///
/// Callbacks run synchronously inside `get_tasks`. Clones share the same tasks.
#[derive(Debug, Clone)]
pub struct InMemoryTaskSource {
    tasks: Arc<RwLock<Vec<Task>>>,
    available: Arc<AtomicBool>,
}

impl InMemoryTaskSource {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn save(&self, task: Task) {
        self.tasks.write().push(task);
    }

    pub fn clear(&self) {
        self.tasks.write().clear();
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    /// While unavailable, every request is answered with `on_data_not_available`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

impl Default for InMemoryTaskSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TaskSource for InMemoryTaskSource {
    fn get_tasks(&self, callback: Box<dyn LoadTasksCallback>) {
        if self.available.load(Ordering::SeqCst) {
            callback.on_tasks_loaded(self.tasks());
        } else {
            callback.on_data_not_available();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_tasks_resolves_loaded_collection() {
        let source = InMemoryTaskSource::new(vec![Task::new("T1", "D1")]);
        assert_eq!(fetch_tasks(&source).await, LoadResult::Loaded(vec![Task::new("T1", "D1")]));
    }

    #[tokio::test]
    async fn fetch_tasks_resolves_unavailable() {
        let source = InMemoryTaskSource::new(vec![]);
        source.set_available(false);
        assert!(fetch_tasks(&source).await.is_unavailable());
    }

    #[tokio::test]
    async fn dropped_callback_counts_as_unavailable() {
        struct SilentSource;
        impl TaskSource for SilentSource {
            fn get_tasks(&self, _callback: Box<dyn LoadTasksCallback>) {}
        }

        assert!(fetch_tasks(&SilentSource).await.is_unavailable());
    }

    #[test]
    fn storage_errors_convert_to_unavailable() {
        let failed: Result<Vec<Task>, SourceError> = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no data directory").into());
        assert!(LoadResult::from(failed).is_unavailable());
        assert_eq!(LoadResult::from(Ok(vec![])), LoadResult::Loaded(vec![]));
    }
}
