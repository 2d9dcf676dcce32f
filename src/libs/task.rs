use crate::libs::error::{GtdError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Project name tasks fall back to when their project is deleted.
pub const INBOX: &str = "Inbox";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier assigned by the repository. Absent on records
    /// written before identifiers existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    /// Builds a pending task stamped with `now` as its creation time.
    pub fn new(title: &str, project: Option<&str>, due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            project: project.map(str::to_string),
            due_date: due_date.map(|due| to_iso_string(&due)),
            completed: false,
            created_at: to_iso_string(&now),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GtdError::Validation("task title must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn in_project(&self, name: &str) -> bool {
        self.project.as_deref() == Some(name)
    }
}

/// Formats a timestamp the way browsers' `Date.toISOString` does.
pub fn to_iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Named(String),
}

impl FromStr for ProjectFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "all" => ProjectFilter::All,
            name => ProjectFilter::Named(name.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl FromStr for StatusFilter {
    type Err = GtdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            other => Err(GtdError::Validation(format!(
                "unknown status filter '{}', expected all, completed or pending",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub project: ProjectFilter,
    pub status: StatusFilter,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let project = match &self.project {
            ProjectFilter::All => true,
            ProjectFilter::Named(name) => task.in_project(name),
        };
        let status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Pending => !task.completed,
        };

        project && status
    }
}
