#[cfg(test)]
mod tests {
    use gtd::db::backend::{Backend, MemoryBackend, SqliteBackend};
    use gtd::db::db::{Collection, Db};
    use gtd::db::tasks::Tasks;
    use gtd::libs::error::GtdError;
    use gtd::libs::project::Project;
    use gtd::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("gtd.db")).unwrap();
            StoreTestContext { temp_dir, db }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: Some(1),
                title: "Write report".to_string(),
                project: Some("Work".to_string()),
                due_date: Some("2024-06-10T09:00:00.000Z".to_string()),
                completed: false,
                created_at: "2024-06-01T08:00:00.000Z".to_string(),
            },
            Task {
                id: Some(2),
                title: "Call mom".to_string(),
                project: None,
                due_date: None,
                completed: true,
                created_at: "2024-06-02T08:00:00.000Z".to_string(),
            },
        ]
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_collections_load_empty(ctx: &mut StoreTestContext) {
        assert!(ctx.db.load::<Task>(Collection::Tasks).is_empty());
        assert!(ctx.db.load::<Project>(Collection::Projects).is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_load_round_trip(ctx: &mut StoreTestContext) {
        let tasks = sample_tasks();
        let projects = vec![Project::new("Work"), Project::new("Personal")];

        ctx.db.save(Collection::Tasks, &tasks).unwrap();
        ctx.db.save(Collection::Projects, &projects).unwrap();

        assert_eq!(ctx.db.load::<Task>(Collection::Tasks), tasks);
        assert_eq!(ctx.db.load::<Project>(Collection::Projects), projects);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_data_survives_reopen(ctx: &mut StoreTestContext) {
        ctx.db.save(Collection::Tasks, &sample_tasks()).unwrap();

        let reopened = Db::open(ctx.temp_dir.path().join("gtd.db")).unwrap();
        assert_eq!(reopened.load::<Task>(Collection::Tasks), sample_tasks());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_replaces_whole_collection(ctx: &mut StoreTestContext) {
        ctx.db.save(Collection::Tasks, &sample_tasks()).unwrap();
        ctx.db.save(Collection::Tasks, &sample_tasks()[..1]).unwrap();

        assert_eq!(ctx.db.load::<Task>(Collection::Tasks).len(), 1);
    }

    #[test]
    fn test_corrupt_sqlite_value_loads_empty() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.write(Collection::Tasks, "[{\"title\": ").unwrap();
        let db = Db::with_backend(backend);

        assert!(db.load::<Task>(Collection::Tasks).is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let db = Db::with_backend(
            MemoryBackend::new()
                .with_value(Collection::Tasks, "{\"title\": \"not a list\"}")
                .with_value(Collection::Projects, "[{\"label\": \"Work\"}]"),
        );

        assert!(db.load::<Task>(Collection::Tasks).is_empty());
        assert!(db.load::<Project>(Collection::Projects).is_empty());
    }

    #[test]
    fn test_corrupt_collection_is_overwritten_by_next_save() {
        let db = Db::with_backend(MemoryBackend::new().with_value(Collection::Tasks, "garbage"));
        let mut tasks = Tasks::new(&db);

        let task = Task::new("Fresh start", None, None, chrono::Utc::now());
        assert_eq!(tasks.insert(&task).unwrap(), 1);
        assert_eq!(tasks.fetch().len(), 1);
    }

    #[test]
    fn test_legacy_records_without_id_or_completed() {
        let db = Db::with_backend(MemoryBackend::new().with_value(
            Collection::Tasks,
            r#"[{"title":"Old task","project":"Work","createdAt":"2024-01-01T00:00:00.000Z"}]"#,
        ));

        let tasks = db.load::<Task>(Collection::Tasks);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, None);
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].due_date, None);
    }

    #[test]
    fn test_persisted_field_names() {
        let value = serde_json::to_value(&sample_tasks()[0]).unwrap();
        assert_eq!(value["dueDate"], "2024-06-10T09:00:00.000Z");
        assert_eq!(value["createdAt"], "2024-06-01T08:00:00.000Z");
        assert_eq!(value["completed"], false);

        let value = serde_json::to_value(&sample_tasks()[1]).unwrap();
        assert!(value.get("dueDate").is_none());
        assert!(value.get("project").is_none());
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let db = Db::with_backend(MemoryBackend::new().with_quota(16));

        let err = db.save(Collection::Tasks, &sample_tasks()).unwrap_err();
        assert!(matches!(err, GtdError::StorageWrite { collection: Collection::Tasks, .. }));
        assert!(db.load::<Task>(Collection::Tasks).is_empty());
    }
}
