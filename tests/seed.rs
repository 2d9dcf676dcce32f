#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use gtd::db::db::Db;
    use gtd::db::projects::Projects;
    use gtd::db::seed::initialize_sample_data;
    use gtd::db::tasks::Tasks;
    use gtd::libs::formatter::parse_timestamp;
    use gtd::libs::task::Task;
    use test_context::{test_context, TestContext};

    struct SeedTestContext {
        db: Db,
    }

    impl TestContext for SeedTestContext {
        fn setup() -> Self {
            SeedTestContext {
                db: Db::in_memory().unwrap(),
            }
        }
    }

    #[test_context(SeedTestContext)]
    #[test]
    fn test_seed_empty_store(ctx: &mut SeedTestContext) {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap();
        assert!(initialize_sample_data(&ctx.db, now).unwrap());

        let projects: Vec<String> = Projects::new(&ctx.db).fetch().into_iter().map(|p| p.name).collect();
        assert_eq!(projects, vec!["Work", "Personal", "Learning"]);

        let tasks = Tasks::new(&ctx.db).fetch();
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Set up GTD system", "Read a book", "Learn JavaScript"]);

        let due: Vec<_> = tasks
            .iter()
            .map(|t| parse_timestamp(t.due_date.as_deref().unwrap()).unwrap())
            .collect();
        assert!(due.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(tasks[0].due_date.as_deref(), Some("2024-06-10T09:30:00.000Z"));
        assert_eq!(tasks[1].due_date.as_deref(), Some("2024-06-11T09:30:00.000Z"));
        assert_eq!(tasks[2].due_date.as_deref(), Some("2024-06-17T09:30:00.000Z"));

        assert!(tasks.iter().all(|t| !t.completed));
        assert!(tasks.iter().all(|t| t.created_at == "2024-06-10T09:30:00.000Z"));
        assert_eq!(tasks[0].project.as_deref(), Some("Work"));
        assert_eq!(tasks[2].project.as_deref(), Some("Learning"));
    }

    #[test_context(SeedTestContext)]
    #[test]
    fn test_seed_runs_once(ctx: &mut SeedTestContext) {
        let now = Utc::now();
        assert!(initialize_sample_data(&ctx.db, now).unwrap());
        assert!(!initialize_sample_data(&ctx.db, now).unwrap());

        assert_eq!(Projects::new(&ctx.db).fetch().len(), 3);
        assert_eq!(Tasks::new(&ctx.db).fetch().len(), 3);
    }

    #[test_context(SeedTestContext)]
    #[test]
    fn test_seed_skipped_when_either_collection_has_data(ctx: &mut SeedTestContext) {
        Projects::new(&ctx.db).insert("Garden").unwrap();
        assert!(!initialize_sample_data(&ctx.db, Utc::now()).unwrap());
        assert!(Tasks::new(&ctx.db).fetch().is_empty());

        let other = Db::in_memory().unwrap();
        Tasks::new(&other)
            .insert(&Task::new("Existing", None, None, Utc::now()))
            .unwrap();
        assert!(!initialize_sample_data(&other, Utc::now()).unwrap());
        assert!(Projects::new(&other).fetch().is_empty());
    }
}
