use crate::{
    db::{db::Db, projects::Projects, tasks::Tasks},
    libs::{
        config::Config,
        messages::Message,
        query::{dashboard_stats, recent_tasks},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Utc;

pub fn cmd(db: &Db, config: &Config) -> Result<()> {
    let now = Utc::now();
    let tasks = Tasks::new(db).fetch();
    let projects = Projects::new(db).fetch();

    msg_print!(Message::DashboardHeader, true);
    View::stats(&dashboard_stats(&tasks, &projects, &now));

    let recent = recent_tasks(&tasks, config.recent_limit);
    if recent.is_empty() {
        msg_info!(Message::NoRecentTasks, true);
        return Ok(());
    }

    msg_print!(Message::RecentTasksHeader, true);
    View::tasks(&recent, &now);
    Ok(())
}
