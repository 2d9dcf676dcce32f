use super::formatter::format_due;
use super::project::Project;
use super::query::{DashboardStats, DateGroup};
use super::task::Task;
use chrono::{DateTime, Utc};
use prettytable::{row, Table};

pub struct View {}

impl View {
    fn task_table(tasks: &[Task], now: &DateTime<Utc>) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PROJECT", "DUE", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
                task.title,
                task.project.as_deref().unwrap_or(""),
                format_due(task.due_date.as_deref(), now),
                if task.completed { "✔" } else { "" }
            ]);
        }

        table
    }

    pub fn tasks(tasks: &[Task], now: &DateTime<Utc>) {
        Self::task_table(tasks, now).printstd();
    }

    pub fn projects(projects: &[Project]) {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME"]);
        for (index, project) in projects.iter().enumerate() {
            table.add_row(row![index + 1, project.name]);
        }
        table.printstd();
    }

    pub fn upcoming(groups: &[DateGroup], now: &DateTime<Utc>) {
        for group in groups {
            println!("{}", group.label);
            Self::task_table(&group.tasks, now).printstd();
        }
    }

    pub fn stats(stats: &DashboardStats) {
        let mut table = Table::new();

        table.add_row(row!["TODAY", "UPCOMING", "PROJECTS"]);
        table.add_row(row![stats.today, stats.upcoming, stats.projects]);
        table.printstd();
    }
}
