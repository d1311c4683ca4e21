//! Query-string and form payloads of the HTML pages.

use crate::libs::error::AppResult;
use crate::libs::task::{CompletionFilter, TaskFilter, TaskInput};
use serde::{Deserialize, Serialize};

/// Listing filters as submitted by the filter form. Echoed back to the page
/// so the selected options stay selected.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub show_completed: Option<String>,
}

impl ListQuery {
    pub fn to_filter(&self) -> AppResult<TaskFilter> {
        TaskFilter::parse(
            self.search.as_deref(),
            self.category.as_deref(),
            self.priority.as_deref(),
            self.show_completed.as_deref(),
        )
    }

    pub fn completion(&self) -> CompletionFilter {
        CompletionFilter::parse(self.show_completed.as_deref())
    }
}

/// Fields of the add-task and edit-task forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskForm {
    /// Present only on the add form; distinguishes creation from a plain POST.
    pub add_task: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category_id: Option<String>,
}

impl TaskForm {
    pub fn is_add(&self) -> bool {
        self.add_task.is_some()
    }

    pub fn to_input(&self) -> AppResult<TaskInput> {
        TaskInput::from_form(
            self.title.as_deref(),
            self.description.as_deref(),
            self.priority.as_deref(),
            self.category_id.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryForm {
    pub name: Option<String>,
}
