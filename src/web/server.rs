use super::templates::Templates;
use super::{categories, tasks};
use crate::db::store::Store;
use crate::libs::error::AppResult;
use crate::libs::messages::Message;
use crate::msg_info;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: Store) -> AppResult<Self> {
        Ok(AppState {
            store,
            templates: Arc::new(Templates::new()?),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(tasks::index).post(tasks::index_post))
        .route("/edit/:task_id", get(tasks::edit_form).post(tasks::edit_submit))
        .route("/delete/:task_id", post(tasks::delete))
        .route("/toggle/:task_id", post(tasks::toggle))
        .route("/categories", get(categories::list).post(categories::create))
        .route("/delete_category/:category_id", post(categories::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the application on `listener` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    msg_info!(Message::ServerShuttingDown);
}
