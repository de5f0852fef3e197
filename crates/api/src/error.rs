//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. Error bodies are JSON:
//! `{"detail": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is well-formed JSON but violates the record schema.
    #[error("{0}")]
    Validation(String),

    /// Request body could not be read as JSON at all.
    #[error("{0}")]
    BadRequest(String),

    /// Store operation failed.
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::Validation(e.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        // Server errors carry the underlying failure text as well.
        let detail = self.to_string();

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
