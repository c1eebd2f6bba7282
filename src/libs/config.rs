//! Configuration management for todostat.
//!
//! Settings live in `config.json` inside the platform data directory. Every
//! section is optional; a missing file or a missing section means defaults.
//!
//! ```rust,no_run
//! use todostat::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("database: {}", config.storage_or_default().db_file_name);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where the task list is stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// SQLite file name, relative to the data directory.
    pub db_file_name: String,
}

/// How the statistics screen renders.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatsConfig {
    /// Print active/completed shares next to the counts.
    pub show_percentages: bool,
    /// Print the task list below the statistics.
    pub show_tasks: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsConfig>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file_name: DB_FILE_NAME.to_string(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            show_percentages: true,
            show_tasks: false,
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether there was one.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn storage_or_default(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    pub fn stats_or_default(&self) -> StatsConfig {
        self.stats.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, seeded with the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "stats".to_string(),
                name: "Statistics".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = config.storage_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        db_file_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDbFileName.to_string())
                            .default(default.db_file_name)
                            .interact_text()?,
                    });
                }
                "stats" => {
                    let default = config.stats_or_default();
                    msg_print!(Message::ConfigModuleStats);
                    config.stats = Some(StatsConfig {
                        show_percentages: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowPercentages.to_string())
                            .default(default.show_percentages)
                            .interact()?,
                        show_tasks: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowTasks.to_string())
                            .default(default.show_tasks)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
