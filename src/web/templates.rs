use crate::libs::error::AppResult;
use axum::response::Html;
use minijinja::{context, Environment};
use serde::Serialize;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("tasks.html", include_str!("../../templates/tasks.html")),
    ("task_edit.html", include_str!("../../templates/task_edit.html")),
    ("categories.html", include_str!("../../templates/categories.html")),
];

const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Page templates compiled into the binary. `.html` templates are autoescaped.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Templates { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> AppResult<Html<String>> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}

/// Renders the standalone error page.
///
/// Does not depend on [`Templates`] so error responses can be produced from
/// anywhere; falls back to plain text if rendering itself fails.
pub fn render_error_page(status: u16, reason: &str, message: &str) -> String {
    Environment::new()
        .render_named_str("error.html", ERROR_TEMPLATE, context! { status, reason, message })
        .unwrap_or_else(|_| format!("{} {}", status, reason))
}
