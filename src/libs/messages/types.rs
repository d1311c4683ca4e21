/// Every user-facing console message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; callers pass
/// variants to the `msg_*` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskToggled(i64, bool),

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryIgnored(String),
    CategoryDeleted(i64, usize), // id, orphaned task count

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    ConfigOverwritten,

    // === SERVER MESSAGES ===
    ServerStarting(String),
    ServerListening(String),
    ServerShuttingDown,
    ServerStopped,
    RequestFailed(String),

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseInitialized(String),
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
