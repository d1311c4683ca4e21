#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskdesk::db::db::Db;
    use taskdesk::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("data").join("taskdesk.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        assert!(MigrationManager::new().get_migration_history(&conn).unwrap().is_empty());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), version1 as usize);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_foreign_keys_enforced(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let result = db.conn.execute("INSERT INTO tasks (title, category_id) VALUES ('Orphan', 12345)", []);
        assert!(result.is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_rejects_unknown_priority(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let result = db.conn.execute("INSERT INTO tasks (title, priority) VALUES ('Odd', 'Urgent')", []);
        assert!(result.is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unreadable_migrations_table_is_an_error(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        conn.execute("CREATE TABLE migrations (id INTEGER PRIMARY KEY)", []).unwrap();

        assert!(get_db_version(&conn).is_err());
        assert!(needs_migration(&conn).is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_empty_migrations_table_is_version_zero(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(&ctx.db_path).unwrap();
        conn.execute(
            "CREATE TABLE migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL)",
            [],
        )
        .unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
    }
}
