#[cfg(test)]
mod tests {
    use taskdesk::db::categories::Categories;
    use taskdesk::db::store::Store;
    use taskdesk::db::tasks::Tasks;
    use taskdesk::libs::error::AppError;
    use taskdesk::libs::task::{Priority, TaskFilter, TaskInput};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::open(&temp_dir.path().join("tasks.db")).unwrap();
            TaskTestContext { _temp_dir: temp_dir, store }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_created_with_defaults(ctx: &mut TaskTestContext) {
        let task = ctx
            .store
            .transaction(|tx| {
                let tasks = Tasks::new(tx);
                let id = tasks.insert(&TaskInput::new("Write report"))?;
                tasks.get(id)
            })
            .unwrap();

        assert_eq!(task.title, "Write report");
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert_eq!(task.category_id, None);
        assert_eq!(task.description, None);
        assert!(task.created_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(ctx: &mut TaskTestContext) {
        let id = ctx.store.transaction(|tx| Tasks::new(tx).insert(&TaskInput::new("Original"))).unwrap();
        let category_id = ctx.store.transaction(|tx| Categories::new(tx).create("Home")).unwrap();

        let input = TaskInput::new("Updated")
            .with_description("More detail")
            .with_priority(Priority::High)
            .with_category(category_id);
        ctx.store.transaction(|tx| Tasks::new(tx).update(id, &input)).unwrap();

        let updated = ctx.store.transaction(|tx| Tasks::new(tx).get(id)).unwrap();
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.description.as_deref(), Some("More detail"));
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.category_id, category_id);
        assert_eq!(updated.category.as_deref(), Some("Home"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_task_is_not_found(ctx: &mut TaskTestContext) {
        let err = ctx.store.transaction(|tx| Tasks::new(tx).update(42, &TaskInput::new("Nope"))).unwrap_err();
        assert!(err.is_not_found());

        let err = ctx.store.transaction(|tx| Tasks::new(tx).get(42)).unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Task", id: 42 }));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete_twice(ctx: &mut TaskTestContext) {
        let id = ctx.store.transaction(|tx| Tasks::new(tx).insert(&TaskInput::new("Temporary"))).unwrap();

        ctx.store.transaction(|tx| Tasks::new(tx).delete(id)).unwrap();
        let remaining = ctx.store.transaction(|tx| Tasks::new(tx).fetch(&TaskFilter::all())).unwrap();
        assert!(remaining.is_empty());

        let err = ctx.store.transaction(|tx| Tasks::new(tx).delete(id)).unwrap_err();
        assert!(err.is_not_found());

        let err = ctx.store.transaction(|tx| Tasks::new(tx).get(id)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_deleted_ids_are_not_reused(ctx: &mut TaskTestContext) {
        let first = ctx.store.transaction(|tx| Tasks::new(tx).insert(&TaskInput::new("First"))).unwrap();
        ctx.store.transaction(|tx| Tasks::new(tx).delete(first)).unwrap();

        let second = ctx.store.transaction(|tx| Tasks::new(tx).insert(&TaskInput::new("Second"))).unwrap();
        assert!(second > first);
        assert!(ctx.store.transaction(|tx| Tasks::new(tx).get(first)).unwrap_err().is_not_found());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_twice_restores_state(ctx: &mut TaskTestContext) {
        let id = ctx.store.transaction(|tx| Tasks::new(tx).insert(&TaskInput::new("Flip me"))).unwrap();

        assert!(ctx.store.transaction(|tx| Tasks::new(tx).toggle(id)).unwrap());
        assert!(ctx.store.transaction(|tx| Tasks::new(tx).get(id)).unwrap().completed);

        assert!(!ctx.store.transaction(|tx| Tasks::new(tx).toggle(id)).unwrap());
        assert!(!ctx.store.transaction(|tx| Tasks::new(tx).get(id)).unwrap().completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_unknown_task(ctx: &mut TaskTestContext) {
        let err = ctx.store.transaction(|tx| Tasks::new(tx).toggle(7)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unknown_category_reference_rejected(ctx: &mut TaskTestContext) {
        let input = TaskInput::new("Dangling").with_category(Some(99));
        let err = ctx.store.transaction(|tx| Tasks::new(tx).insert(&input)).unwrap_err();
        assert!(err.is_invalid_input());

        let all = ctx.store.transaction(|tx| Tasks::new(tx).fetch(&TaskFilter::all())).unwrap();
        assert!(all.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_failed_transaction_rolls_back(ctx: &mut TaskTestContext) {
        let result: Result<(), AppError> = ctx.store.transaction(|tx| {
            Tasks::new(tx).insert(&TaskInput::new("Never committed"))?;
            Err(AppError::invalid("abort"))
        });
        assert!(result.is_err());

        let all = ctx.store.transaction(|tx| Tasks::new(tx).fetch(&TaskFilter::all())).unwrap();
        assert!(all.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_listing_is_newest_first(ctx: &mut TaskTestContext) {
        for title in ["one", "two", "three"] {
            ctx.store.transaction(|tx| Tasks::new(tx).insert(&TaskInput::new(title))).unwrap();
        }

        let titles: Vec<String> = ctx
            .store
            .transaction(|tx| Tasks::new(tx).fetch(&TaskFilter::all()))
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["three", "two", "one"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_store_reopens_existing_database(ctx: &mut TaskTestContext) {
        ctx.store.transaction(|tx| Tasks::new(tx).insert(&TaskInput::new("Persistent"))).unwrap();

        let reopened = Store::open(&ctx._temp_dir.path().join("tasks.db")).unwrap();
        let all = reopened.transaction(|tx| Tasks::new(tx).fetch(&TaskFilter::all())).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Persistent");
    }
}
