//! Read-only projections over tasks and projects.
//!
//! Every function here takes slices and returns new values; nothing is
//! written back to the store. Two kinds of date comparison are in use and
//! they are deliberately not unified:
//!
//! - **textual**: [`today_tasks`] and the today count of [`dashboard_stats`]
//!   compare the stored due-date text before `T` with `now`'s `YYYY-MM-DD`
//! - **instant**: [`upcoming_tasks`], the upcoming count and [`recent_tasks`]
//!   parse timestamps and compare points in time
//!
//! The upcoming view keeps tasks due *on or after* the start of today while
//! the dashboard's upcoming count keeps tasks due *strictly after* it, so a
//! task due exactly at midnight is listed but not counted.

use super::formatter::{date_key, date_part, format_date_label, parse_timestamp, start_of_day};
use super::project::Project;
use super::task::{Task, TaskFilter};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Tasks sharing one date label in the upcoming view.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub label: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Pending tasks due today.
    pub today: usize,
    /// Pending tasks due after the start of today.
    pub upcoming: usize,
    pub projects: usize,
}

pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

fn is_due_today(task: &Task, today: &str) -> bool {
    task.due_date.as_deref().is_some_and(|due| date_part(due) == today)
}

pub fn today_tasks(tasks: &[Task], now: &DateTime<Utc>) -> Vec<Task> {
    let today = date_key(now);
    tasks.iter().filter(|task| is_due_today(task, &today)).cloned().collect()
}

/// Pending tasks due on or after the start of today, sorted by due date and
/// grouped under their date label in order of first appearance.
pub fn upcoming_tasks(tasks: &[Task], now: &DateTime<Utc>, include_weekday: bool) -> Vec<DateGroup> {
    let start = start_of_day(now);
    let mut due: Vec<(DateTime<Utc>, &Task)> = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| task.due_date.as_deref().and_then(parse_timestamp).map(|date| (date, task)))
        .filter(|(date, _)| *date >= start)
        .collect();
    due.sort_by_key(|(date, _)| *date);

    let mut groups: Vec<DateGroup> = Vec::new();
    for (date, task) in due {
        let label = format_date_label(&date, now, include_weekday);
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.tasks.push(task.clone()),
            None => groups.push(DateGroup {
                label,
                tasks: vec![task.clone()],
            }),
        }
    }

    groups
}

/// Most recently created tasks first. Unparseable creation times sort last.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut recent: Vec<&Task> = tasks.iter().collect();
    recent.sort_by_key(|task| Reverse(parse_timestamp(&task.created_at)));
    recent.into_iter().take(limit).cloned().collect()
}

pub fn dashboard_stats(tasks: &[Task], projects: &[Project], now: &DateTime<Utc>) -> DashboardStats {
    let today = date_key(now);
    let start = start_of_day(now);

    DashboardStats {
        today: tasks
            .iter()
            .filter(|task| !task.completed && is_due_today(task, &today))
            .count(),
        upcoming: tasks
            .iter()
            .filter(|task| !task.completed)
            .filter_map(|task| task.due_date.as_deref().and_then(parse_timestamp))
            .filter(|date| *date > start)
            .count(),
        projects: projects.len(),
    }
}
