use super::config::StatsConfig;
use super::messages::Message;
use super::statistics::PresentationState;
use super::task::Task;
use crate::{msg_error, msg_info, msg_print};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "STATUS", "CREATED"]);
        for task in tasks {
            let status = if task.completed { "completed" } else { "active" };
            let created = task.timestamp.map(|ts| ts.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default();
            table.add_row(row![task.id.unwrap_or(0), task.title_for_list(), task.description, status, created]);
        }

        table
    }

    pub fn statistics_table(state: &PresentationState, config: &StatsConfig) -> Table {
        let stats = &state.statistics;
        let mut table = Table::new();

        if config.show_percentages {
            table.add_row(row!["", "COUNT", "SHARE"]);
            let active_share = format!("{:.1}%", stats.active_percent());
            let completed_share = format!("{:.1}%", stats.completed_percent());
            table.add_row(row!["Active", stats.active, active_share]);
            table.add_row(row!["Completed", stats.completed, completed_share]);
        } else {
            table.add_row(row!["", "COUNT"]);
            table.add_row(row!["Active", stats.active]);
            table.add_row(row!["Completed", stats.completed]);
        }

        table
    }

    pub fn tasks(tasks: &[Task]) {
        if tasks.is_empty() {
            msg_info!(Message::TasksNotFound);
            return;
        }
        msg_print!(Message::TasksHeader);
        Self::tasks_table(tasks).printstd();
    }

    /// Prints the statistics screen for `state`.
    pub fn statistics(state: &PresentationState, config: &StatsConfig) {
        msg_print!(Message::StatisticsHeader, true);

        if state.error {
            msg_error!(Message::StatisticsLoadError);
            return;
        }

        Self::statistics_table(state, config).printstd();

        if state.empty {
            if state.statistics.total() == 0 {
                msg_info!(Message::StatisticsNoTasks);
            } else {
                msg_info!(Message::StatisticsNothingActive);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::statistics::TaskStatistics;

    #[test]
    fn statistics_table_includes_shares_when_enabled() {
        let state = PresentationState {
            empty: false,
            error: false,
            statistics: TaskStatistics { active: 1, completed: 3 },
        };
        let rendered = View::statistics_table(&state, &StatsConfig::default()).to_string();
        assert!(rendered.contains("25.0%"));
        assert!(rendered.contains("75.0%"));
    }

    #[test]
    fn statistics_table_omits_shares_when_disabled() {
        let config = StatsConfig {
            show_percentages: false,
            show_tasks: false,
        };
        let rendered = View::statistics_table(&PresentationState::default(), &config).to_string();
        assert!(!rendered.contains("SHARE"));
    }

    #[test]
    fn tasks_table_shows_status() {
        let tasks = vec![Task::new("Title1", "Description1"), Task::new("Title2", "Description2").completed()];
        let rendered = View::tasks_table(&tasks).to_string();
        assert!(rendered.contains("active"));
        assert!(rendered.contains("completed"));
        assert!(rendered.contains("Description2"));
    }
}
