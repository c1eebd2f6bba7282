use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{Task, TaskFilter},
        view::View,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    action: TaskAction,
}

#[derive(Debug, Subcommand)]
enum TaskAction {
    #[command(about = "Add a new active task")]
    Add {
        #[arg(required = true)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    #[command(about = "List tasks")]
    List {
        #[arg(short, long, value_enum, default_value_t = ListFilter::All)]
        filter: ListFilter,
    },
    #[command(about = "Mark a task completed")]
    Complete { id: i32 },
    #[command(about = "Mark a completed task active again")]
    Activate { id: i32 },
    #[command(about = "Delete a task")]
    Delete { id: i32 },
    #[command(about = "Delete every completed task")]
    ClearCompleted,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListFilter {
    All,
    Active,
    Completed,
}

impl From<ListFilter> for TaskFilter {
    fn from(filter: ListFilter) -> Self {
        match filter {
            ListFilter::All => TaskFilter::All,
            ListFilter::Active => TaskFilter::Active,
            ListFilter::Completed => TaskFilter::Completed,
        }
    }
}

pub fn cmd(task_args: TaskArgs) -> Result<()> {
    let storage = Config::read()?.storage_or_default();
    let mut tasks = Tasks::open(&storage.db_file_name)?;

    match task_args.action {
        TaskAction::Add { title, description } => {
            let id = tasks.insert(&Task::new(&title, &description))?;
            msg_success!(Message::TaskCreated(id));
        }
        TaskAction::List { filter } => {
            View::tasks(&tasks.fetch(filter.into())?);
        }
        TaskAction::Complete { id } => {
            if tasks.complete(id)? == 0 {
                msg_bail_anyhow!(Message::TaskNotFoundWithId(id));
            }
            msg_success!(Message::TaskCompleted(id));
        }
        TaskAction::Activate { id } => {
            if tasks.activate(id)? == 0 {
                msg_bail_anyhow!(Message::TaskNotFoundWithId(id));
            }
            msg_success!(Message::TaskActivated(id));
        }
        TaskAction::Delete { id } => {
            if tasks.delete(id)? == 0 {
                msg_bail_anyhow!(Message::TaskNotFoundWithId(id));
            }
            msg_success!(Message::TaskDeleted(id));
        }
        TaskAction::ClearCompleted => {
            let count = tasks.clear_completed()?;
            msg_success!(Message::CompletedTasksCleared(count));
        }
    }

    Ok(())
}
