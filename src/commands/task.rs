use crate::{
    db::{db::Db, projects::Projects, tasks::Tasks},
    libs::{
        formatter::parse_due_input,
        messages::Message,
        query::filter_tasks,
        task::{to_iso_string, ProjectFilter, StatusFilter, Task, TaskFilter},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Project the task belongs to
        #[arg(short, long)]
        project: Option<String>,
        /// Due date: today, tomorrow, +N days or YYYY-MM-DD[THH:MM]
        #[arg(short, long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Only tasks of this project ("all" for every project)
        #[arg(short, long, default_value = "all")]
        project: String,
        /// all, completed or pending
        #[arg(short, long, default_value = "all")]
        status: String,
    },
    /// Toggle a task between completed and pending
    Done {
        /// Task ID
        id: u64,
    },
    /// Edit a task
    Edit {
        /// Task ID
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "clear_project")]
        project: Option<String>,
        /// Remove the task from its project
        #[arg(long)]
        clear_project: bool,
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
}

pub fn cmd(db: &Db, args: TaskArgs) -> Result<()> {
    let now = Utc::now();
    match args.command {
        TaskCommand::Add { title, project, due } => handle_add(db, &title, project, due, now),
        TaskCommand::List { project, status } => handle_list(db, &project, &status, now),
        TaskCommand::Done { id } => handle_done(db, id),
        TaskCommand::Edit {
            id,
            title,
            project,
            clear_project,
            due,
            clear_due,
        } => handle_edit(db, id, title, project, clear_project, due, clear_due, now),
        TaskCommand::Delete { id } => handle_delete(db, id),
    }
}

fn parse_due(input: &str, now: &DateTime<Utc>) -> Result<DateTime<Utc>> {
    match parse_due_input(input, now) {
        Some(due) => Ok(due),
        None => msg_bail_anyhow!(Message::InvalidDueDate(input.to_string())),
    }
}

fn warn_unknown_project(db: &Db, project: Option<&str>) {
    if let Some(name) = project {
        if !Projects::new(db).exists(name) {
            msg_warning!(Message::ProjectUnknown(name.to_string()));
        }
    }
}

fn handle_add(db: &Db, title: &str, project: Option<String>, due: Option<String>, now: DateTime<Utc>) -> Result<()> {
    let due = due.map(|input| parse_due(&input, &now)).transpose()?;
    warn_unknown_project(db, project.as_deref());

    let task = Task::new(title, project.as_deref(), due, now);
    let id = Tasks::new(db).insert(&task)?;

    msg_success!(Message::TaskCreated(id, task.title));
    Ok(())
}

fn handle_list(db: &Db, project: &str, status: &str, now: DateTime<Utc>) -> Result<()> {
    let filter = TaskFilter {
        project: project.parse::<ProjectFilter>()?,
        status: status
            .parse::<StatusFilter>()
            .map_err(|_| msg_error_anyhow!(Message::InvalidStatusFilter(status.to_string())))?,
    };
    let tasks = filter_tasks(&Tasks::new(db).fetch(), &filter);

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks, &now);
    Ok(())
}

fn handle_done(db: &Db, id: u64) -> Result<()> {
    let mut tasks = Tasks::new(db);
    if !tasks.toggle_by_id(id)? {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    }

    match tasks.get_by_id(id) {
        Some(task) if task.completed => msg_success!(Message::TaskCompleted(id)),
        _ => msg_success!(Message::TaskReopened(id)),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    db: &Db,
    id: u64,
    title: Option<String>,
    project: Option<String>,
    clear_project: bool,
    due: Option<String>,
    clear_due: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    if title.is_none() && project.is_none() && !clear_project && due.is_none() && !clear_due {
        msg_info!(Message::NoTaskChanges);
        return Ok(());
    }

    let mut tasks = Tasks::new(db);
    let Some(current) = tasks.get_by_id(id) else {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    };

    let due_date = match (due, clear_due) {
        (_, true) => None,
        (Some(input), false) => Some(to_iso_string(&parse_due(&input, &now)?)),
        (None, false) => current.due_date.clone(),
    };
    warn_unknown_project(db, project.as_deref());
    let updated = Task {
        title: title.unwrap_or_else(|| current.title.clone()),
        project: if clear_project {
            None
        } else {
            project.or_else(|| current.project.clone())
        },
        due_date,
        ..current
    };

    if tasks.update_by_id(id, &updated)? {
        msg_success!(Message::TaskUpdated(id));
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}

fn handle_delete(db: &Db, id: u64) -> Result<()> {
    if Tasks::new(db).delete_by_id(id)? {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}
