//! Store diagnostics (`GET /test`).
//!
//! Every field is filled independently. A failing check degrades its own
//! field to a descriptive string; the endpoint itself always answers 200.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::Store;
use crate::state::AppState;

/// Maximum number of collection names reported.
pub const MAX_COLLECTIONS: usize = 10;

/// Maximum length of error text embedded in a status field.
pub const MAX_ERROR_CHARS: usize = 80;

/// Diagnostics response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Always running if this response exists.
    pub backend: String,
    /// Store status, or the error that degraded it.
    pub database: String,
    /// Whether a connection string is configured.
    pub database_url: String,
    /// Name reported by the store, if a store client exists.
    pub database_name: Option<String>,
    pub connection_status: String,
    /// Up to [`MAX_COLLECTIONS`] collection names.
    pub collections: Vec<String>,
}

/// Run all checks against `store`.
pub async fn collect(store: &Store, database_url_set: bool) -> Diagnostics {
    let database_url = if database_url_set {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
    .to_string();

    let mut report = Diagnostics {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url,
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Store::Unavailable { reason } = store {
        report.database = format!("❌ Not Available: {}", truncate(reason, MAX_ERROR_CHARS));
        return report;
    }

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();
    report.database_name = Some(
        store
            .database_name()
            .filter(|name| !name.is_empty())
            .unwrap_or("❌ Unknown")
            .to_string(),
    );

    match store.collection_names().await {
        Ok(names) => {
            report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate(&e.to_string(), MAX_ERROR_CHARS)
            );
        }
    }

    report
}

/// GET /test
pub async fn report(State(state): State<AppState>) -> Json<Diagnostics> {
    let database_url_set = state.config().database_url.is_some();
    Json(collect(state.store(), database_url_set).await)
}

/// Truncate `text` to at most `max` characters.
fn truncate(text: &str, max: usize) -> &str {
    text.char_indices()
        .nth(max)
        .and_then(|(end, _)| text.get(..end))
        .unwrap_or(text)
}
