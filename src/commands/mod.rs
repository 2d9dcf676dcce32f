pub mod dashboard;
pub mod init;
pub mod project;
pub mod task;
pub mod today;
pub mod upcoming;

use crate::db::{db::Db, seed::initialize_sample_data};
use crate::libs::{config::Config, messages::Message};
use crate::{msg_debug, msg_info};
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create, list, complete, edit and delete tasks")]
    Task(task::TaskArgs),
    #[command(about = "Create, list and delete projects")]
    Project(project::ProjectArgs),
    #[command(about = "Show tasks due today")]
    Today,
    #[command(about = "Show pending tasks grouped by due date")]
    Upcoming,
    #[command(about = "Show summary counts and recent tasks")]
    Dashboard,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            command => {
                let config = Config::read()?;
                let db = open_store(&config)?;
                dispatch(command, &db, &config)
            }
        }
    }

    /// Runs the parsed command against an already opened store.
    pub fn execute(self, db: &Db, config: &Config) -> Result<()> {
        dispatch(self.command, db, config)
    }
}

fn dispatch(command: Commands, db: &Db, config: &Config) -> Result<()> {
    match command {
        Commands::Init(args) => init::cmd(args),
        Commands::Task(args) => task::cmd(db, args),
        Commands::Project(args) => project::cmd(db, args),
        Commands::Today => today::cmd(db),
        Commands::Upcoming => upcoming::cmd(db, config),
        Commands::Dashboard => dashboard::cmd(db, config),
    }
}

/// Opens the configured store and seeds it on first use.
pub fn open_store(config: &Config) -> Result<Db> {
    let db = match &config.database_path {
        Some(path) => {
            msg_debug!(format!("Using database {}", path.display()));
            Db::open(path)?
        }
        None => Db::new()?,
    };

    if config.seed_sample_data && initialize_sample_data(&db, Utc::now())? {
        msg_info!(Message::SampleDataInitialized);
    }

    Ok(db)
}
