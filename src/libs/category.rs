use super::error::{AppError, AppResult};
use serde::Serialize;

/// Longest accepted category name, in characters.
pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Number of tasks referencing this category.
    pub task_count: i64,
}

/// Trims a submitted category name.
///
/// Returns `Ok(None)` for blank names, which callers ignore without error.
pub fn normalize_name(raw: &str) -> AppResult<Option<String>> {
    let name = raw.trim();
    if name.is_empty() {
        return Ok(None);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::invalid(format!("category name must be at most {} characters", NAME_MAX_LEN)));
    }
    Ok(Some(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_skips_blank() {
        assert_eq!(normalize_name("  Work ").unwrap(), Some("Work".to_string()));
        assert_eq!(normalize_name("   ").unwrap(), None);
    }

    #[test]
    fn rejects_long_names() {
        assert!(normalize_name(&"a".repeat(NAME_MAX_LEN + 1)).is_err());
    }
}
