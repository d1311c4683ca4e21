//! Display implementation for taskdesk messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent between the CLI commands, the server and the migration runner.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskToggled(id, completed) => {
                format!("Task {} marked {}", id, if *completed { "completed" } else { "active" })
            }

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(name) => format!("Category '{}' created", name),
            Message::CategoryIgnored(name) => format!("Category '{}' skipped: blank or already exists", name),
            Message::CategoryDeleted(id, orphaned) => {
                format!("Category {} deleted, {} task(s) left without a category", id, orphaned)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigOverwritten => "Existing configuration will be overwritten".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerStarting(version) => format!("Starting taskdesk v{}", version),
            Message::ServerListening(address) => format!("Listening on http://{}", address),
            Message::ServerShuttingDown => "Shutdown signal received, finishing in-flight requests...".to_string(),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::RequestFailed(error) => format!("Request failed: {}", error),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Using database {}", path),
            Message::DatabaseInitialized(path) => format!("Database ready at {}", path),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_parameters() {
        assert_eq!(Message::TaskToggled(4, true).to_string(), "Task 4 marked completed");
        assert_eq!(Message::TaskToggled(4, false).to_string(), "Task 4 marked active");
        assert_eq!(
            Message::CategoryDeleted(2, 3).to_string(),
            "Category 2 deleted, 3 task(s) left without a category"
        );
    }
}
