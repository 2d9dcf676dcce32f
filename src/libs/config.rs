//! Configuration management for gtd.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). A missing file is not an
//! error: every setting has a default, and fields missing from an older file
//! fall back to their defaults as well.
//!
//! ## Settings
//!
//! - `recent_limit`: number of tasks in the dashboard's recent list
//! - `upcoming_weekday`: include the weekday name in upcoming group labels
//! - `seed_sample_data`: seed sample projects and tasks into an empty store
//! - `database_path`: use this database file instead of the default location
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gtd::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.recent_limit = 10;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::query::DEFAULT_RECENT_LIMIT;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of tasks listed under "recent" on the dashboard.
    pub recent_limit: usize,

    /// Whether upcoming group labels include the weekday ("Wednesday, Jun 12").
    pub upcoming_weekday: bool,

    /// Seed sample projects and tasks when the store is empty.
    pub seed_sample_data: bool,

    /// Database file to use instead of `gtd.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            recent_limit: DEFAULT_RECENT_LIMIT,
            upcoming_weekday: true,
            seed_sample_data: true,
            database_path: None,
        }
    }
}

impl Config {
    /// Location of the configuration file in the platform data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the configuration, falling back to defaults if no file exists.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        Self::read_from(Self::path()?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader, true);
        let recent_limit = Input::with_theme(&theme)
            .with_prompt(Message::PromptRecentLimit.to_string())
            .default(current.recent_limit)
            .interact_text()?;
        let upcoming_weekday = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptUpcomingWeekday.to_string())
            .default(current.upcoming_weekday)
            .interact()?;
        let seed_sample_data = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptSeedSampleData.to_string())
            .default(current.seed_sample_data)
            .interact()?;
        let database_path: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(
                current
                    .database_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            recent_limit,
            upcoming_weekday,
            seed_sample_data,
            database_path: (!database_path.trim().is_empty()).then(|| PathBuf::from(database_path.trim())),
        })
    }
}
