use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{messages::Message, query::today_tasks, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Utc;

pub fn cmd(db: &Db) -> Result<()> {
    let now = Utc::now();
    let tasks = today_tasks(&Tasks::new(db).fetch(), &now);

    if tasks.is_empty() {
        msg_info!(Message::NoTasksForToday);
        return Ok(());
    }

    msg_print!(Message::TodayHeader, true);
    View::tasks(&tasks, &now);
    Ok(())
}
