//! Category management page.

use super::forms::CategoryForm;
use super::server::AppState;
use crate::db::categories::Categories;
use crate::libs::error::{parse_id, AppResult};
use crate::libs::messages::Message;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use minijinja::context;

/// `GET /categories`: all categories ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let categories = state.store.run(|tx| Categories::new(tx).list()).await?;

    state.templates.render("categories.html", context! { categories })
}

/// `POST /categories`: blank and duplicate names are skipped without error.
pub async fn create(State(state): State<AppState>, Form(form): Form<CategoryForm>) -> AppResult<Redirect> {
    let name = form.name.unwrap_or_default();
    let submitted = name.clone();
    match state.store.run(move |tx| Categories::new(tx).create(&name)).await? {
        Some(id) => tracing::info!(category_id = id, "{}", Message::CategoryCreated(submitted)),
        None => tracing::debug!("{}", Message::CategoryIgnored(submitted)),
    }

    Ok(Redirect::to("/categories"))
}

/// `POST /delete_category/{category_id}`: tasks of the category are kept
/// without a category.
pub async fn delete(State(state): State<AppState>, Path(category_id): Path<String>) -> AppResult<Redirect> {
    let id = parse_id(&category_id, "category id")?;
    let orphaned = state.store.run(move |tx| Categories::new(tx).delete(id)).await?;
    tracing::info!(category_id = id, orphaned, "{}", Message::CategoryDeleted(id, orphaned));

    Ok(Redirect::to("/categories"))
}
