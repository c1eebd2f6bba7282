//! Task records and filters.
//!
//! A task is a to-do item with a title, a description and a completion flag.
//! Tasks read back from storage also carry their row id and the time they were
//! created.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Option<i32>,
    pub timestamp: Option<NaiveDateTime>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Creates a new active task.
    pub fn new(title: &str, description: &str) -> Self {
        Task {
            id: None,
            timestamp: None,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        }
    }

    /// Builder-style shortcut for fixtures that start out completed.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Title shown in lists: the title, or the description when the title is blank.
    pub fn title_for_list(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.description
        } else {
            &self.title
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}
