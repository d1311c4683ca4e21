//! Task pages: listing with filters, creation, edit, delete and toggle.

use super::forms::{ListQuery, TaskForm};
use super::server::AppState;
use crate::db::{categories::Categories, tasks::Tasks};
use crate::libs::error::{parse_id, AppResult};
use crate::libs::messages::Message;
use crate::libs::task::Priority;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;

/// `GET /`: filtered listing, newest first.
pub async fn index(State(state): State<AppState>, Query(query): Query<ListQuery>) -> AppResult<Html<String>> {
    let filter = query.to_filter()?;
    let (tasks, categories) = state
        .store
        .run(move |tx| Ok((Tasks::new(tx).fetch(&filter)?, Categories::new(tx).list()?)))
        .await?;
    tracing::debug!(count = tasks.len(), "tasks listed");

    state.templates.render(
        "tasks.html",
        context! {
            tasks,
            categories,
            priorities => Priority::ALL,
            show_completed => query.completion().as_str(),
            query,
        },
    )
}

/// `POST /`: creates a task when the form carries `add_task`, otherwise renders
/// the listing like `GET /`.
pub async fn index_post(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    Form(form): Form<TaskForm>,
) -> AppResult<Response> {
    if !form.is_add() {
        return index(State(state), Query(query)).await.map(IntoResponse::into_response);
    }

    let input = form.to_input()?;
    let id = state.store.run(move |tx| Tasks::new(tx).insert(&input)).await?;
    tracing::info!(task_id = id, "{}", Message::TaskCreated(id));

    Ok(Redirect::to("/").into_response())
}

/// `GET /edit/{task_id}`: edit form with the current values.
pub async fn edit_form(State(state): State<AppState>, Path(task_id): Path<String>) -> AppResult<Html<String>> {
    let id = parse_id(&task_id, "task id")?;
    let (task, categories) = state
        .store
        .run(move |tx| Ok((Tasks::new(tx).get(id)?, Categories::new(tx).list()?)))
        .await?;

    state.templates.render(
        "task_edit.html",
        context! {
            task,
            categories,
            priorities => Priority::ALL,
        },
    )
}

/// `POST /edit/{task_id}`: overwrites the task and returns to the listing.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Form(form): Form<TaskForm>,
) -> AppResult<Redirect> {
    let id = parse_id(&task_id, "task id")?;
    let input = form.to_input();
    state
        .store
        .run(move |tx| {
            let tasks = Tasks::new(tx);
            // an unknown task wins over invalid form data
            tasks.get(id)?;
            tasks.update(id, &input?)
        })
        .await?;
    tracing::info!(task_id = id, "{}", Message::TaskUpdated(id));

    Ok(Redirect::to("/"))
}

/// `POST /delete/{task_id}`
pub async fn delete(State(state): State<AppState>, Path(task_id): Path<String>) -> AppResult<Redirect> {
    let id = parse_id(&task_id, "task id")?;
    state.store.run(move |tx| Tasks::new(tx).delete(id)).await?;
    tracing::info!(task_id = id, "{}", Message::TaskDeleted(id));

    Ok(Redirect::to("/"))
}

/// `POST /toggle/{task_id}`
pub async fn toggle(State(state): State<AppState>, Path(task_id): Path<String>) -> AppResult<Redirect> {
    let id = parse_id(&task_id, "task id")?;
    let completed = state.store.run(move |tx| Tasks::new(tx).toggle(id)).await?;
    tracing::info!(task_id = id, completed, "{}", Message::TaskToggled(id, completed));

    Ok(Redirect::to("/"))
}
