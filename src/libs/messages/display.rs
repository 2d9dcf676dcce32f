//! Display implementation for [`Message`].
//!
//! All user-facing wording is defined here in one place. Empty-view texts
//! match the ones the web version of the tracker showed.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' created", id, title),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskCompleted(id) => format!("Task #{} completed", id),
            Message::TaskReopened(id) => format!("Task #{} marked as pending again", id),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TasksHeader => "Tasks".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoTaskChanges => "Nothing to change, pass at least one field to edit".to_string(),
            Message::InvalidDueDate(input) => format!(
                "Cannot read due date '{}'. Use today, tomorrow, +N or YYYY-MM-DD[THH:MM]",
                input
            ),
            Message::InvalidStatusFilter(input) => {
                format!("Unknown status '{}', expected all, completed or pending", input)
            }

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' created", name),
            Message::ProjectAlreadyExists(name) => format!("Project '{}' already exists", name),
            Message::ProjectDeleted(name, 0) => format!("Project '{}' deleted", name),
            Message::ProjectDeleted(name, moved) => {
                format!("Project '{}' deleted, {} task(s) moved to Inbox", name, moved)
            }
            Message::ProjectNotFound(name) => format!("Project '{}' not found", name),
            Message::ProjectUnknown(name) => {
                format!("Project '{}' does not exist yet, the task keeps the name anyway", name)
            }
            Message::ProjectsHeader => "Projects".to_string(),
            Message::NoProjectsFound => "No projects found. Add your first project!".to_string(),
            Message::ConfirmDeleteProject(name) => {
                format!("Delete project '{}' and move its tasks to Inbox?", name)
            }

            // === VIEW MESSAGES ===
            Message::TodayHeader => "Today".to_string(),
            Message::NoTasksForToday => "No tasks for today. Enjoy your day!".to_string(),
            Message::UpcomingHeader => "Upcoming".to_string(),
            Message::NoUpcomingTasks => "No upcoming tasks. Good job!".to_string(),
            Message::DashboardHeader => "Dashboard".to_string(),
            Message::RecentTasksHeader => "Recent tasks".to_string(),
            Message::NoRecentTasks => "No recent tasks.".to_string(),
            Message::SampleDataInitialized => "Sample projects and tasks added to get you started".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigWizardHeader => "gtd configuration".to_string(),
            Message::PromptRecentLimit => "How many recent tasks should the dashboard show".to_string(),
            Message::PromptUpcomingWeekday => "Show weekday names in upcoming dates".to_string(),
            Message::PromptSeedSampleData => "Add sample data when the store is empty".to_string(),
            Message::PromptDatabasePath => "Database file (leave empty for the default location)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::StorageWriteFailed(error) => format!("Changes were not saved: {}", error),
        };

        write!(f, "{}", text)
    }
}
