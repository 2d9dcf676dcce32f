use crate::{
    db::{db::Db, projects::Projects},
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a new project
    Add {
        /// Project name
        name: String,
    },
    /// List all projects
    List,
    /// Delete a project and move its tasks to Inbox
    Delete {
        /// Project name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(db: &Db, args: ProjectArgs) -> Result<()> {
    match args.command {
        ProjectCommand::Add { name } => handle_add(db, name),
        ProjectCommand::List => handle_list(db),
        ProjectCommand::Delete { name, yes } => handle_delete(db, name, yes),
    }
}

fn handle_add(db: &Db, name: String) -> Result<()> {
    if Projects::new(db).insert(&name)? {
        msg_success!(Message::ProjectCreated(name));
    } else {
        msg_error!(Message::ProjectAlreadyExists(name));
    }
    Ok(())
}

fn handle_list(db: &Db) -> Result<()> {
    let projects = Projects::new(db).fetch();

    if projects.is_empty() {
        msg_info!(Message::NoProjectsFound);
        return Ok(());
    }

    msg_print!(Message::ProjectsHeader, true);
    View::projects(&projects);
    Ok(())
}

fn handle_delete(db: &Db, name: String, yes: bool) -> Result<()> {
    let mut projects = Projects::new(db);
    if !projects.is_referenced(&name) {
        msg_error!(Message::ProjectNotFound(name));
        return Ok(());
    }

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteProject(name.clone()).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let moved = projects.delete(&name)?;
    msg_success!(Message::ProjectDeleted(name, moved));
    Ok(())
}
