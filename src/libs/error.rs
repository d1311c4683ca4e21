//! Error type shared by the store and the HTTP handlers.

use thiserror::Error;

/// Failures surfaced to the requester of a task or category operation.
#[derive(Debug, Error)]
pub enum AppError {
    /// The referenced task or category does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// An identifier could not be parsed or a required field is missing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn task_not_found(id: i64) -> Self {
        AppError::NotFound { entity: "Task", id }
    }

    pub fn category_not_found(id: i64) -> Self {
        AppError::NotFound { entity: "Category", id }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Parses a numeric identifier taken from a path segment or form field.
pub fn parse_id(raw: &str, what: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid(format!("{} must be a number, got '{}'", what, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_numbers() {
        assert_eq!(parse_id("42", "task id").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "task id").unwrap(), 7);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id("abc", "category id").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("category id"));
    }

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(AppError::task_not_found(3).to_string(), "Task 3 not found");
        assert!(AppError::category_not_found(1).is_not_found());
    }
}
