//! View-model behind the statistics screen.
//!
//! [`StatsViewModel`] asks a [`TaskSource`] for the task collection and turns
//! the answer into observable presentation state:
//!
//! - `empty`: no active task to show, or the data is unavailable
//! - `error`: the source reported that its data is unavailable
//! - `active_tasks` / `completed_tasks`: counts from the last successful load
//! - `data_loading`: a request is in flight
//!
//! ## Overlapping requests
//!
//! Every call to [`StatsViewModel::load_statistics`] takes a new generation
//! number and the callback remembers the generation it was issued for. Only
//! the callback of the newest request is applied; answers to superseded
//! requests are dropped, whatever order they arrive in. The generation check
//! and the writes to the fields happen under one lock, and listeners are told
//! after it is released.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use todostat::libs::source::InMemoryTaskSource;
//! use todostat::libs::task::Task;
//! use todostat::libs::view_model::StatsViewModel;
//!
//! let source = InMemoryTaskSource::new(vec![Task::new("Title1", "Description1")]);
//! let view_model = StatsViewModel::new(Arc::new(source));
//! view_model.empty.subscribe(|empty| println!("empty: {}", empty));
//! view_model.start();
//! ```

use super::observable::{ObservableField, PendingChange};
use super::source::{fetch_tasks, LoadResult, LoadTasksCallback, TaskSource};
use super::statistics::{PresentationState, TaskStatistics};
use super::task::Task;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Statistics of the task collection, published as observable fields.
///
/// Created through [`StatsViewModel::new`], which returns it in an [`Arc`] so
/// pending callbacks can hold a weak reference to it.
pub struct StatsViewModel {
    source: Arc<dyn TaskSource>,
    /// `true` when there is no active task, or when the data is unavailable.
    pub empty: ObservableField<bool>,
    /// `true` when the last applied load found the data unavailable.
    pub error: ObservableField<bool>,
    /// Number of tasks not yet completed. Reset to 0 when the data is unavailable.
    pub active_tasks: ObservableField<usize>,
    /// Number of completed tasks. Reset to 0 when the data is unavailable.
    pub completed_tasks: ObservableField<usize>,
    /// `true` from the moment a load is issued until its answer is applied.
    pub data_loading: ObservableField<bool>,
    latest: Mutex<LatestLoad>,
}

/// Newest issued request and the collection of the last applied answer.
///
/// Held while the observable fields are written, so each answer is published
/// as a whole and only if no newer request exists.
#[derive(Default)]
struct LatestLoad {
    generation: u64,
    tasks: Vec<Task>,
}

impl StatsViewModel {
    /// Creates the view-model with every field cleared. Nothing is requested
    /// until [`start`](Self::start) or [`load_statistics`](Self::load_statistics).
    pub fn new(source: Arc<dyn TaskSource>) -> Arc<Self> {
        Arc::new(StatsViewModel {
            source,
            empty: ObservableField::new(false),
            error: ObservableField::new(false),
            active_tasks: ObservableField::new(0),
            completed_tasks: ObservableField::new(0),
            data_loading: ObservableField::new(false),
            latest: Mutex::new(LatestLoad::default()),
        })
    }

    /// Called by the hosting screen each time it becomes active.
    pub fn start(self: &Arc<Self>) {
        self.load_statistics();
    }

    /// Issues one request to the task source and returns immediately.
    ///
    /// The state is updated when the source calls back. Sources are free to
    /// call back before this method returns.
    pub fn load_statistics(self: &Arc<Self>) {
        let generation = self.begin_load();
        let callback = StatisticsCallback {
            view_model: Arc::downgrade(self),
            generation,
        };
        self.source.get_tasks(Box::new(callback));
    }

    /// Loads through the future-based adapter and resolves with the state
    /// once this request's answer has been applied.
    ///
    /// If another load supersedes this one while it is in flight, the answer is
    /// dropped and the current state is returned instead.
    pub async fn refresh(&self) -> PresentationState {
        let generation = self.begin_load();
        let result = fetch_tasks(&*self.source).await;
        self.apply(generation, result);
        self.state()
    }

    /// Waits until no request is in flight and returns the state.
    pub async fn settled(&self) -> PresentationState {
        self.data_loading.wait_for(|loading| !loading).await;
        self.state()
    }

    /// Consistent snapshot of the published fields.
    pub fn state(&self) -> PresentationState {
        let _latest = self.latest.lock();
        PresentationState {
            empty: self.empty.get(),
            error: self.error.get(),
            statistics: TaskStatistics {
                active: self.active_tasks.get(),
                completed: self.completed_tasks.get(),
            },
        }
    }

    /// Tasks the current statistics were computed from. Empty while the data
    /// is unavailable.
    pub fn tasks(&self) -> Vec<Task> {
        self.latest.lock().tasks.clone()
    }

    fn begin_load(&self) -> u64 {
        let (generation, loading) = {
            let mut latest = self.latest.lock();
            latest.generation += 1;
            (latest.generation, self.data_loading.store(true))
        };
        debug!(generation, "requesting tasks for statistics");
        publish(loading);
        generation
    }

    /// Publishes the state derived from `result` unless a newer request exists.
    fn apply(&self, generation: u64, result: LoadResult) -> bool {
        let state = PresentationState::from_result(&result);

        let changes = {
            let mut latest = self.latest.lock();
            if generation != latest.generation {
                debug!(generation, latest = latest.generation, "dropping answer to a superseded request");
                return false;
            }

            latest.tasks = match result {
                LoadResult::Loaded(tasks) => tasks,
                LoadResult::Unavailable => Vec::new(),
            };
            (
                self.active_tasks.store(state.statistics.active),
                self.completed_tasks.store(state.statistics.completed),
                self.empty.store(state.empty),
                self.error.store(state.error),
                self.data_loading.store(false),
            )
        };

        if state.error {
            warn!(generation, "tasks data is not available");
        } else {
            debug!(generation, active = state.statistics.active, completed = state.statistics.completed, "statistics loaded");
        }

        let (active, completed, empty, error, loading) = changes;
        publish(active);
        publish(completed);
        publish(empty);
        publish(error);
        publish(loading);
        true
    }
}

fn publish<T>(change: Option<PendingChange<'_, T>>)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    if let Some(change) = change {
        change.notify();
    }
}

/// Callback handed to the task source for one request.
struct StatisticsCallback {
    view_model: Weak<StatsViewModel>,
    generation: u64,
}

impl StatisticsCallback {
    fn finish(self, result: LoadResult) {
        match self.view_model.upgrade() {
            Some(view_model) => {
                view_model.apply(self.generation, result);
            }
            None => debug!(generation = self.generation, "view-model dropped before tasks arrived"),
        }
    }
}

impl LoadTasksCallback for StatisticsCallback {
    fn on_tasks_loaded(self: Box<Self>, tasks: Vec<Task>) {
        self.finish(LoadResult::Loaded(tasks));
    }

    fn on_data_not_available(self: Box<Self>) {
        self.finish(LoadResult::Unavailable);
    }
}
