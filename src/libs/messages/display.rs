//! Text of every user-facing message.
//!
//! All wording lives here so commands only ever pick a [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskCompleted(id) => format!("Task {} marked complete", id),
            Message::TaskActivated(id) => format!("Task {} marked active", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::CompletedTasksCleared(count) => format!("Cleared {} completed task(s)", count),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksNotFound => "You have no tasks!".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader => "Statistics".to_string(),
            Message::StatisticsLoading => "Loading...".to_string(),
            Message::StatisticsNoTasks => "You have no tasks.".to_string(),
            Message::StatisticsNothingActive => "Nothing left to do.".to_string(),
            Message::StatisticsLoadError => "Error while loading tasks".to_string(),
            Message::StatisticsChanged { field, value } => format!("{} changed to {}", field, value),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleStats => "Statistics screen settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptDbFileName => "Enter database file name".to_string(),
            Message::PromptShowPercentages => "Show percentages?".to_string(),
            Message::PromptShowTasks => "List tasks under the statistics?".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_are_interpolated() {
        assert_eq!(Message::TaskCreated(3).to_string(), "Task 3 created");
        assert_eq!(Message::CompletedTasksCleared(2).to_string(), "Cleared 2 completed task(s)");
        assert_eq!(
            Message::StatisticsChanged {
                field: "empty",
                value: "true".to_string()
            }
            .to_string(),
            "empty changed to true"
        );
    }
}
