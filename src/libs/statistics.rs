//! Derivation of presentation state from a load outcome.
//!
//! Everything here is a pure function of the task collection, so the rules can
//! be checked without a task source or a view-model:
//!
//! ```text
//! Loaded(tasks)  ->  empty = no active task,  error = false
//! Unavailable    ->  empty = true,            error = true
//! ```

use super::source::LoadResult;
use super::task::Task;

/// Active/completed split of a task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStatistics {
    pub active: usize,
    pub completed: usize,
}

impl TaskStatistics {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let active = tasks.iter().filter(|task| task.is_active()).count();
        TaskStatistics {
            active,
            completed: tasks.len() - active,
        }
    }

    pub fn total(&self) -> usize {
        self.active + self.completed
    }

    pub fn active_percent(&self) -> f64 {
        percent(self.active, self.total())
    }

    pub fn completed_percent(&self) -> f64 {
        percent(self.completed, self.total())
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Flags and counts published by the statistics view-model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationState {
    pub empty: bool,
    pub error: bool,
    pub statistics: TaskStatistics,
}

impl PresentationState {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let statistics = TaskStatistics::from_tasks(tasks);
        PresentationState {
            // An empty collection has no active task either
            empty: statistics.active == 0,
            error: false,
            statistics,
        }
    }

    pub fn unavailable() -> Self {
        PresentationState {
            empty: true,
            error: true,
            statistics: TaskStatistics::default(),
        }
    }

    pub fn from_result(result: &LoadResult) -> Self {
        match result {
            LoadResult::Loaded(tasks) => Self::from_tasks(tasks),
            LoadResult::Unavailable => Self::unavailable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Task> {
        vec![
            Task::new("Title1", "Description1"),
            Task::new("Title2", "Description2").completed(),
            Task::new("Title3", "Description3").completed(),
        ]
    }

    #[test]
    fn counts_active_and_completed() {
        let stats = TaskStatistics::from_tasks(&fixture());
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn percentages_of_empty_collection_are_zero() {
        let stats = TaskStatistics::default();
        assert_eq!(stats.active_percent(), 0.0);
        assert_eq!(stats.completed_percent(), 0.0);
    }

    #[test]
    fn percentages_split_the_collection() {
        let stats = TaskStatistics { active: 1, completed: 3 };
        assert_eq!(stats.active_percent(), 25.0);
        assert_eq!(stats.completed_percent(), 75.0);
    }

    #[test]
    fn empty_collection_is_empty() {
        let state = PresentationState::from_result(&LoadResult::Loaded(vec![]));
        assert!(state.empty);
        assert!(!state.error);
    }

    #[test]
    fn one_active_task_is_not_empty() {
        let state = PresentationState::from_result(&LoadResult::Loaded(fixture()));
        assert!(!state.empty);
        assert!(!state.error);
    }

    #[test]
    fn only_completed_tasks_is_empty() {
        let tasks = vec![Task::new("Title2", "Description2").completed()];
        let state = PresentationState::from_tasks(&tasks);
        assert!(state.empty);
        assert_eq!(state.statistics.completed, 1);
    }

    #[test]
    fn unavailable_sets_both_flags() {
        let state = PresentationState::from_result(&LoadResult::Unavailable);
        assert!(state.empty);
        assert!(state.error);
        assert_eq!(state.statistics, TaskStatistics::default());
    }

    #[test]
    fn empty_iff_no_active_task() {
        let samples: Vec<Vec<bool>> = vec![vec![], vec![true], vec![false], vec![true, true], vec![true, false, true], vec![false, false]];
        for completions in samples {
            let tasks: Vec<Task> = completions
                .iter()
                .enumerate()
                .map(|(i, &done)| {
                    let task = Task::new(&format!("T{}", i), "");
                    if done {
                        task.completed()
                    } else {
                        task
                    }
                })
                .collect();
            let expected = completions.iter().all(|&done| done);
            assert_eq!(PresentationState::from_tasks(&tasks).empty, expected, "{:?}", completions);
        }
    }
}
