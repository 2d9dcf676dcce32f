use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{config::Config, messages::Message, query::upcoming_tasks, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Utc;

pub fn cmd(db: &Db, config: &Config) -> Result<()> {
    let now = Utc::now();
    let groups = upcoming_tasks(&Tasks::new(db).fetch(), &now, config.upcoming_weekday);

    if groups.is_empty() {
        msg_info!(Message::NoUpcomingTasks);
        return Ok(());
    }

    msg_print!(Message::UpcomingHeader, true);
    View::upcoming(&groups, &now);
    Ok(())
}
