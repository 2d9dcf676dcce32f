use super::db::{Collection, Db};
use crate::libs::error::{GtdError, Result};
use crate::libs::task::Task;

/// One more than the largest id in `tasks`, starting at 1.
fn next_id(tasks: &[Task]) -> Result<u64> {
    tasks
        .iter()
        .filter_map(|t| t.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| GtdError::Validation("no task ids left".to_string()))
}

/// Gives every record stored without an id the next free one, in list order.
fn assign_missing_ids(tasks: &mut [Task]) -> Result<()> {
    let mut next = None;
    for index in 0..tasks.len() {
        if tasks[index].id.is_some() {
            continue;
        }
        let id = match next {
            Some(id) => id,
            None => next_id(tasks)?,
        };
        tasks[index].id = Some(id);
        next = id.checked_add(1);
        tracing::debug!(index, id, "id assigned to stored task");
    }
    Ok(())
}

/// Repository over the task collection.
///
/// Index-based operations address a task by its position in the stored list.
/// Any insert or delete invalidates indices captured earlier; the `*_by_id`
/// variants resolve a stable id to the current index first. An index outside
/// `[0, len)` is ignored and reported as `Ok(false)`.
pub struct Tasks<'a> {
    db: &'a Db,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Tasks { db }
    }

    /// All tasks in insertion order.
    pub fn fetch(&self) -> Vec<Task> {
        self.db.load(Collection::Tasks)
    }

    /// Appends `task` and returns the id assigned to it.
    ///
    /// `created_at` is taken from the record as given. Stored records that
    /// have no id yet get one in the same save.
    pub fn insert(&mut self, task: &Task) -> Result<u64> {
        task.validate()?;

        let mut tasks = self.fetch();
        assign_missing_ids(&mut tasks)?;
        let id = next_id(&tasks)?;
        tasks.push(Task {
            id: Some(id),
            ..task.clone()
        });
        self.db.save(Collection::Tasks, &tasks)?;
        tracing::debug!(id, title = %task.title, "task created");

        Ok(id)
    }

    /// Replaces the task at `index`. The stored `id` and `created_at` are kept.
    pub fn update(&mut self, index: usize, task: &Task) -> Result<bool> {
        task.validate()?;

        let mut tasks = self.fetch();
        assign_missing_ids(&mut tasks)?;
        let Some(current) = tasks.get(index) else {
            tracing::debug!(index, len = tasks.len(), "update ignored, index out of range");
            return Ok(false);
        };
        let replacement = Task {
            id: current.id,
            created_at: current.created_at.clone(),
            ..task.clone()
        };
        tasks[index] = replacement;
        self.db.save(Collection::Tasks, &tasks)?;

        Ok(true)
    }

    /// Removes the task at `index`, shifting later tasks down by one.
    pub fn delete(&mut self, index: usize) -> Result<bool> {
        let mut tasks = self.fetch();
        if index >= tasks.len() {
            tracing::debug!(index, len = tasks.len(), "delete ignored, index out of range");
            return Ok(false);
        }
        tasks.remove(index);
        assign_missing_ids(&mut tasks)?;
        self.db.save(Collection::Tasks, &tasks)?;

        Ok(true)
    }

    /// Flips the completion flag of the task at `index` by replacing the record.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let tasks = self.fetch();
        let Some(task) = tasks.get(index) else {
            tracing::debug!(index, len = tasks.len(), "toggle ignored, index out of range");
            return Ok(false);
        };
        let toggled = Task {
            completed: !task.completed,
            ..task.clone()
        };

        self.update(index, &toggled)
    }

    /// Current index of the task with `id`.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.fetch().iter().position(|t| t.id == Some(id))
    }

    pub fn get_by_id(&self, id: u64) -> Option<Task> {
        self.fetch().into_iter().find(|t| t.id == Some(id))
    }

    pub fn update_by_id(&mut self, id: u64, task: &Task) -> Result<bool> {
        match self.position(id) {
            Some(index) => self.update(index, task),
            None => Ok(false),
        }
    }

    pub fn delete_by_id(&mut self, id: u64) -> Result<bool> {
        match self.position(id) {
            Some(index) => self.delete(index),
            None => Ok(false),
        }
    }

    pub fn toggle_by_id(&mut self, id: u64) -> Result<bool> {
        match self.position(id) {
            Some(index) => self.toggle(index),
            None => Ok(false),
        }
    }
}
