//! Contact and newsletter submission handlers.
//!
//! Bodies are validated by [`ValidJson`] before the handler runs. Valid
//! submissions are stored; a store failure is reported as a 500 carrying
//! the failure text.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use nexora_core::{ContactMessage, DocumentId, NewsletterSubscriber};

use crate::error::Result;
use crate::extract::ValidJson;
use crate::state::AppState;

/// Response for a stored submission: `{"ok": true, "id": "..."}`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub id: DocumentId,
}

impl CreatedResponse {
    const fn new(id: DocumentId) -> Self {
        Self { ok: true, id }
    }
}

/// POST /api/contact
#[instrument(skip(state, message), fields(email = %message.email))]
pub async fn contact(
    State(state): State<AppState>,
    ValidJson(message): ValidJson<ContactMessage>,
) -> Result<Json<CreatedResponse>> {
    let id = state.store().create(&message).await?;
    tracing::info!(id = %id, "Contact message stored");
    Ok(Json(CreatedResponse::new(id)))
}

/// POST /api/newsletter
#[instrument(skip(state, subscriber), fields(email = %subscriber.email))]
pub async fn newsletter(
    State(state): State<AppState>,
    ValidJson(subscriber): ValidJson<NewsletterSubscriber>,
) -> Result<Json<CreatedResponse>> {
    let id = state.store().create(&subscriber).await?;
    tracing::info!(id = %id, "Newsletter subscriber stored");
    Ok(Json(CreatedResponse::new(id)))
}
