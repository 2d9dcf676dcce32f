use super::db::Db;
use super::projects::Projects;
use super::tasks::Tasks;
use crate::libs::error::Result;
use crate::libs::task::Task;
use chrono::{DateTime, Duration, Utc};

pub const SAMPLE_PROJECTS: [&str; 3] = ["Work", "Personal", "Learning"];

/// Seeds default projects and tasks when both collections are empty.
///
/// Returns `Ok(true)` if anything was written.
pub fn initialize_sample_data(db: &Db, now: DateTime<Utc>) -> Result<bool> {
    let mut tasks = Tasks::new(db);
    let mut projects = Projects::new(db);
    if !tasks.fetch().is_empty() || !projects.fetch().is_empty() {
        return Ok(false);
    }

    for name in SAMPLE_PROJECTS {
        projects.insert(name)?;
    }

    let samples = [
        ("Set up GTD system", "Work", now),
        ("Read a book", "Personal", now + Duration::days(1)),
        ("Learn JavaScript", "Learning", now + Duration::days(7)),
    ];
    for (title, project, due) in samples {
        tasks.insert(&Task::new(title, Some(project), Some(due), now))?;
    }
    tracing::info!("sample data initialized");

    Ok(true)
}
