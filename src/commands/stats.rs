use crate::libs::{config::Config, repository::TasksRepository, screen::StatsScreen, view::View, view_model::StatsViewModel};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long, help = "Also list the tasks the statistics were computed from")]
    tasks: bool,
}

pub async fn cmd(stats_args: StatsArgs) -> Result<()> {
    let config = Config::read()?;
    let stats_config = config.stats_or_default();
    let repository = TasksRepository::new(&config.storage_or_default().db_file_name);

    let view_model = StatsViewModel::new(Arc::new(repository));
    let mut screen = StatsScreen::new(view_model, stats_config.clone());
    screen.create();
    screen.resume();
    let state = screen.render().await;

    if (stats_args.tasks || stats_config.show_tasks) && !state.error {
        View::tasks(&screen.view_model().tasks());
    }
    screen.destroy();

    Ok(())
}
