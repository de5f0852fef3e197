//! Content listing with fallback.
//!
//! Every content endpoint answers with stored records when the store has
//! some, and with the built-in seed records otherwise. An empty collection
//! and a failed read are treated the same way, and neither is visible to
//! the caller.

use serde::Serialize;

use nexora_core::Record;

use crate::db::{Document, PublicDocument, Store, StoreError};

/// The records in a listing, either from the store or from seed content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Items<T> {
    /// Records read from the store.
    Stored(Vec<PublicDocument>),
    /// Seed records served in place of an empty or unreachable store.
    Fallback(Vec<T>),
}

impl<T> Items<T> {
    /// Returns true if these are seed records.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Response body for all content listings: `{"items": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse<T> {
    pub items: Items<T>,
}

/// Decide what to serve for a collection given the result of reading it.
///
/// Non-empty reads are mapped to public documents; empty reads and errors
/// yield `fallback()`.
pub fn stored_or_fallback<T>(
    collection: &str,
    fetched: Result<Vec<Document>, StoreError>,
    fallback: impl FnOnce() -> Vec<T>,
) -> Items<T> {
    match fetched {
        Ok(documents) if !documents.is_empty() => {
            Items::Stored(documents.into_iter().map(PublicDocument::from).collect())
        }
        Ok(_) => {
            tracing::debug!(collection, "Collection empty, serving fallback content");
            Items::Fallback(fallback())
        }
        Err(e) => {
            tracing::warn!(collection, error = %e, "Store read failed, serving fallback content");
            Items::Fallback(fallback())
        }
    }
}

/// Read every record of kind `R`, falling back to `fallback`.
pub async fn list<R: Record + Clone>(store: &Store, fallback: &[R]) -> ListResponse<R> {
    let fetched = store.fetch_all::<R>().await;
    ListResponse {
        items: stored_or_fallback(R::COLLECTION, fetched, || fallback.to_vec()),
    }
}
