use super::db::{Collection, Db};
use crate::libs::error::Result;
use crate::libs::project::Project;
use crate::libs::task::{Task, INBOX};

pub struct Projects<'a> {
    db: &'a Db,
}

impl<'a> Projects<'a> {
    pub fn new(db: &'a Db) -> Self {
        Projects { db }
    }

    pub fn fetch(&self) -> Vec<Project> {
        self.db.load(Collection::Projects)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.fetch().iter().any(|p| p.name == name)
    }

    /// Whether `name` is a project or is still named by any task.
    pub fn is_referenced(&self, name: &str) -> bool {
        self.exists(name) || self.db.load::<Task>(Collection::Tasks).iter().any(|t| t.in_project(name))
    }

    /// Adds a project named `name`. Returns `Ok(false)` if it already exists.
    pub fn insert(&mut self, name: &str) -> Result<bool> {
        let project = Project::new(name);
        project.validate()?;

        let mut projects = self.fetch();
        if projects.iter().any(|p| p.name == name) {
            tracing::debug!(name, "project already exists");
            return Ok(false);
        }
        projects.push(project);
        self.db.save(Collection::Projects, &projects)?;

        Ok(true)
    }

    /// Deletes every project named `name` and moves its tasks to the Inbox.
    ///
    /// Returns the number of reassigned tasks. The project and task
    /// collections are saved one after the other: if the task save fails the
    /// project is already gone while its tasks still carry the old name.
    pub fn delete(&mut self, name: &str) -> Result<usize> {
        let projects: Vec<Project> = self.fetch().into_iter().filter(|p| p.name != name).collect();
        self.db.save(Collection::Projects, &projects)?;

        let mut reassigned = 0;
        let tasks: Vec<Task> = self
            .db
            .load::<Task>(Collection::Tasks)
            .into_iter()
            .map(|task| {
                if task.in_project(name) {
                    reassigned += 1;
                    Task {
                        project: Some(INBOX.to_string()),
                        ..task
                    }
                } else {
                    task
                }
            })
            .collect();
        self.db.save(Collection::Tasks, &tasks)?;
        tracing::debug!(name, reassigned, "project deleted");

        Ok(reassigned)
    }
}
