//! Greeting and health handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

/// Greeting returned by `/`.
pub const ROOT_MESSAGE: &str = "NEXORA SYNERGY API Running";

/// Greeting returned by `/api/hello`.
pub const HELLO_MESSAGE: &str = "Hello from the NEXORA SYNERGY backend!";

/// `{"message": ...}` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE,
    })
}

/// GET /api/hello
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: HELLO_MESSAGE,
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the store cannot list its collections.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().collection_names().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::debug!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
