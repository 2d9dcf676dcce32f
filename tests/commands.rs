#[cfg(test)]
mod tests {
    use chrono::Utc;
    use clap::Parser;
    use gtd::commands::{open_store, Cli};
    use gtd::db::db::Db;
    use gtd::db::projects::Projects;
    use gtd::db::tasks::Tasks;
    use gtd::libs::config::Config;
    use gtd::libs::task::{Task, INBOX};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommandTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("custom.db");
            CommandTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl CommandTestContext {
        fn config(&self, seed_sample_data: bool) -> Config {
            Config {
                seed_sample_data,
                database_path: Some(self.db_path.clone()),
                ..Config::default()
            }
        }

        fn run(&self, db: &Db, args: &[&str]) {
            let cli = Cli::try_parse_from(std::iter::once("gtd").chain(args.iter().copied())).unwrap();
            cli.execute(db, &self.config(false)).unwrap();
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_open_store_uses_configured_path_without_seeding(ctx: &mut CommandTestContext) {
        assert!(!ctx.db_path.exists());

        let db = open_store(&ctx.config(false)).unwrap();

        assert!(ctx.db_path.exists());
        assert!(Tasks::new(&db).fetch().is_empty());
        assert!(Projects::new(&db).fetch().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_open_store_seeds_only_once(ctx: &mut CommandTestContext) {
        let config = ctx.config(true);

        let db = open_store(&config).unwrap();
        assert_eq!(Tasks::new(&db).fetch().len(), 3);
        assert_eq!(Projects::new(&db).fetch().len(), 3);
        drop(db);

        let db = open_store(&config).unwrap();
        assert_eq!(Tasks::new(&db).fetch().len(), 3);
        assert_eq!(Projects::new(&db).fetch().len(), 3);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_task_commands_round_trip(ctx: &mut CommandTestContext) {
        let db = open_store(&ctx.config(false)).unwrap();

        ctx.run(&db, &["task", "add", "Write report", "-p", "Work", "-d", "tomorrow"]);
        ctx.run(&db, &["task", "done", "1"]);

        let task = Tasks::new(&db).get_by_id(1).unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.project.as_deref(), Some("Work"));
        assert!(task.due_date.is_some());
        assert!(task.completed);

        ctx.run(&db, &["task", "delete", "1"]);
        assert!(Tasks::new(&db).fetch().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_edit_can_clear_project(ctx: &mut CommandTestContext) {
        let db = open_store(&ctx.config(false)).unwrap();
        Tasks::new(&db)
            .insert(&Task::new("Filed", Some("Work"), None, Utc::now()))
            .unwrap();

        ctx.run(&db, &["task", "edit", "1", "--clear-project"]);

        let task = Tasks::new(&db).get_by_id(1).unwrap();
        assert_eq!(task.project, None);
        assert_eq!(task.title, "Filed");
        assert!(Cli::try_parse_from(["gtd", "task", "edit", "1", "--project", "Home", "--clear-project"]).is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_delete_reassigns_tasks_of_unlisted_project(ctx: &mut CommandTestContext) {
        let db = open_store(&ctx.config(false)).unwrap();
        ctx.run(&db, &["task", "add", "Haunted", "-p", "Ghost"]);
        assert!(!Projects::new(&db).exists("Ghost"));

        ctx.run(&db, &["project", "delete", "Ghost", "-y"]);

        assert_eq!(Tasks::new(&db).get_by_id(1).unwrap().project.as_deref(), Some(INBOX));
    }
}
