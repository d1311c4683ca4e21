//! Task domain types: the stored record, validated input and listing filters.

use super::error::{parse_id, AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Longest accepted task title, in characters.
pub const TITLE_MAX_LEN: usize = 120;

/// Form value meaning "no category selected".
pub const CATEGORY_NONE: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Matches the stored spelling only, as used by the listing filter.
    pub fn from_exact(value: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(AppError::invalid(format!("unknown priority '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category_id: Option<i64>,
    pub completed: bool,
    pub created_at: Option<String>,
    /// Name of the referenced category, filled in by listing queries.
    pub category: Option<String>,
}

/// Validated field set for creating or overwriting a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category_id: Option<i64>,
}

impl TaskInput {
    pub fn new(title: &str) -> Self {
        TaskInput {
            title: title.to_string(),
            description: None,
            priority: Priority::default(),
            category_id: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Builds an input from raw form values.
    ///
    /// The title must be present and non-blank. A blank description is stored
    /// as no description, a missing priority means [`Priority::Medium`] and the
    /// category goes through [`parse_category_ref`].
    pub fn from_form(
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
        category_id: Option<&str>,
    ) -> AppResult<Self> {
        let title = title.map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(AppError::invalid("title is required"));
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(AppError::invalid(format!("title must be at most {} characters", TITLE_MAX_LEN)));
        }

        let description = description.map(str::trim).filter(|d| !d.is_empty()).map(str::to_string);

        let priority = match priority.map(str::trim) {
            None | Some("") => Priority::default(),
            Some(value) => value.parse()?,
        };

        Ok(TaskInput {
            title: title.to_string(),
            description,
            priority,
            category_id: parse_category_ref(category_id)?,
        })
    }
}

/// Normalizes a submitted category reference.
///
/// Absent, empty and the [`CATEGORY_NONE`] sentinel all mean "no category";
/// anything else must be a numeric id.
pub fn parse_category_ref(raw: Option<&str>) -> AppResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value == CATEGORY_NONE => Ok(None),
        Some(value) => parse_id(value, "category id").map(Some),
    }
}

/// Completion-state selector of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl CompletionFilter {
    /// Unknown selector values fall back to [`CompletionFilter::All`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("active") => CompletionFilter::Active,
            Some("completed") => CompletionFilter::Completed,
            _ => CompletionFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionFilter::All => "all",
            CompletionFilter::Active => "active",
            CompletionFilter::Completed => "completed",
        }
    }
}

/// Optional predicates narrowing the task listing. Every `Some` field is
/// combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub priority: Option<Priority>,
    pub completion: CompletionFilter,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from raw query-string values; empty values are ignored.
    pub fn parse(
        search: Option<&str>,
        category: Option<&str>,
        priority: Option<&str>,
        show_completed: Option<&str>,
    ) -> AppResult<Self> {
        let search = search.filter(|s| !s.is_empty()).map(str::to_string);

        let category_id = match category.map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_id(value, "category")?),
        };

        let priority = match priority {
            None | Some("") => None,
            Some(value) => {
                let priority = Priority::from_exact(value);
                Some(priority.ok_or_else(|| AppError::invalid(format!("unknown priority '{}'", value)))?)
            }
        };

        Ok(TaskFilter {
            search,
            category_id,
            priority,
            completion: CompletionFilter::parse(show_completed),
        })
    }

    /// In-memory evaluation of the same predicates the store applies in SQL.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(search) = &self.search {
            if !task.title.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if task.category_id != Some(category_id) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        match self.completion {
            CompletionFilter::All => true,
            CompletionFilter::Active => !task.completed,
            CompletionFilter::Completed => task.completed,
        }
    }
}
