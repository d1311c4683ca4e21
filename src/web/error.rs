use super::templates::render_error_page;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Template(_) | AppError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the requester. Internal failures are not described.
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound { .. } | AppError::InvalidInput(_) => self.to_string(),
            _ => "Something went wrong while handling the request.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "{}", Message::RequestFailed(self.to_string()));
        } else {
            tracing::warn!(status = status.as_u16(), "{}", Message::RequestFailed(self.to_string()));
        }

        let body = render_error_page(status.as_u16(), status.canonical_reason().unwrap_or("Error"), &self.public_message());
        (status, Html(body)).into_response()
    }
}
