//! Document store access.
//!
//! The API talks to its store through the [`DocumentStore`] trait. A single
//! [`Store`] value is built at startup from `DATABASE_URL` and shared through
//! application state. If no connection string is configured, or it cannot
//! be understood, the value is [`Store::Unavailable`] and every operation
//! reports [`StoreError::Unavailable`]. A configured but unreachable server
//! is not `Unavailable`: each call fails on its own and later calls succeed
//! once the server is back.
//!
//! # Backends
//!
//! - `postgres://` / `postgresql://` - [`PgDocumentStore`], JSONB documents
//!   in a single `documents` table
//! - `memory://<name>` - [`MemoryDocumentStore`], process-local

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use nexora_core::{DocumentId, Record};

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Name of the internal key field a stored document may carry.
///
/// It never appears in API output; the key is exposed as `id` instead.
pub const INTERNAL_KEY_FIELD: &str = "_id";

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No store is configured, or the connection could not be established.
    #[error("database not available: {0}")]
    Unavailable(String),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A record could not be encoded as JSON.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// A record did not encode to a JSON object.
    #[error("record must encode to a JSON object")]
    NotAnObject,

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The connection string is malformed.
    #[error("invalid connection string: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The connection string names a backend this build does not support.
    #[error("unsupported connection string scheme: {0}")]
    UnsupportedScheme(String),
}

/// A record as held by the store: its internal key plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub key: Uuid,
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create a document with a freshly generated key.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            key: Uuid::new_v4(),
            fields,
        }
    }
}

/// A record as returned to API clients.
///
/// Same fields as the stored document, with the internal key removed and a
/// string `id` added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PublicDocument(Map<String, Value>);

impl PublicDocument {
    /// Returns the document's public ID.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Returns a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Document> for PublicDocument {
    fn from(document: Document) -> Self {
        let mut fields = document.fields;
        fields.remove(INTERNAL_KEY_FIELD);
        fields.insert("id".to_string(), Value::String(document.key.to_string()));
        Self(fields)
    }
}

/// Operations every store backend provides.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this store is bound to.
    fn database_name(&self) -> &str;

    /// Insert one document into `collection`, returning its generated ID.
    async fn insert_one(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError>;

    /// Fetch every document in `collection`, oldest first.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// List the names of all collections that hold documents.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// The store handle shared by all handlers.
#[derive(Clone)]
pub enum Store {
    /// A live store client.
    Connected(Arc<dyn DocumentStore>),
    /// No store could be set up; `reason` says why.
    Unavailable { reason: String },
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected(store) => f
                .debug_tuple("Connected")
                .field(&store.database_name())
                .finish(),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

impl Store {
    /// Set up the store named by `database_url`.
    ///
    /// Never fails: a missing or malformed URL yields [`Store::Unavailable`]
    /// and is logged. Server reachability is not checked here.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn connect(database_url: Option<&SecretString>) -> Self {
        let Some(url) = database_url else {
            tracing::warn!("DATABASE_URL not set, serving fallback content only");
            return Self::unavailable("DATABASE_URL is not set");
        };

        match open(url) {
            Ok(store) => {
                tracing::info!(database = %store.database_name(), "Document store configured");
                Self::Connected(store)
            }
            Err(e) => {
                tracing::error!(error = %e, "Invalid document store configuration");
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Wrap an already constructed store backend.
    #[must_use]
    pub fn from_store(store: impl DocumentStore + 'static) -> Self {
        Self::Connected(Arc::new(store))
    }

    /// Build an unavailable store with the given reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if a store client exists.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// Returns the database name, if a store client exists.
    #[must_use]
    pub fn database_name(&self) -> Option<&str> {
        match self {
            Self::Connected(store) => Some(store.database_name()),
            Self::Unavailable { .. } => None,
        }
    }

    fn client(&self) -> Result<&dyn DocumentStore, StoreError> {
        match self {
            Self::Connected(store) => Ok(store.as_ref()),
            Self::Unavailable { reason } => Err(StoreError::Unavailable(reason.clone())),
        }
    }

    /// Persist `record` in its collection and return the generated ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store is unavailable, the record cannot
    /// be encoded, or the insert fails.
    pub async fn create<R: Record>(&self, record: &R) -> Result<DocumentId, StoreError> {
        let client = self.client()?;
        let Value::Object(fields) = serde_json::to_value(record)? else {
            return Err(StoreError::NotAnObject);
        };
        client.insert_one(R::COLLECTION, fields).await
    }

    /// Fetch every stored record of kind `R`.
    ///
    /// Documents are returned as stored; they are not re-validated against
    /// `R`, since content may be provisioned directly in the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store is unavailable or the query fails.
    pub async fn fetch_all<R: Record>(&self) -> Result<Vec<Document>, StoreError> {
        self.client()?.find_all(R::COLLECTION).await
    }

    /// List the names of all collections in the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store is unavailable or the query fails.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.client()?.collection_names().await
    }
}

/// Open a store backend for `url` based on its scheme.
fn open(url: &SecretString) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let parsed = Url::parse(url.expose_secret())?;

    match parsed.scheme() {
        "postgres" | "postgresql" => Ok(Arc::new(PgDocumentStore::connect(url)?)),
        "memory" => Ok(Arc::new(MemoryDocumentStore::new(
            parsed
                .host_str()
                .filter(|host| !host.is_empty())
                .unwrap_or(MemoryDocumentStore::DEFAULT_NAME),
        ))),
        other => Err(StoreError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nexora_core::{Email, NewsletterSubscriber};
    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_public_document_replaces_internal_key() {
        let document = Document::new(fields(json!({
            "_id": "legacy-key",
            "title": "Cloud Services",
        })));
        let key = document.key;

        let public = PublicDocument::from(document);

        assert_eq!(public.id(), Some(key.to_string().as_str()));
        assert!(public.get(INTERNAL_KEY_FIELD).is_none());
        assert_eq!(public.get("title"), Some(&json!("Cloud Services")));
    }

    #[test]
    fn test_public_document_serializes_flat() {
        let document = Document {
            key: Uuid::nil(),
            fields: fields(json!({"name": "A. Rivera"})),
        };
        let value = serde_json::to_value(PublicDocument::from(document)).unwrap();
        assert_eq!(
            value,
            json!({"id": "00000000-0000-0000-0000-000000000000", "name": "A. Rivera"})
        );
    }

    #[tokio::test]
    async fn test_unavailable_store_reports_reason() {
        let store = Store::unavailable("DATABASE_URL is not set");
        let subscriber = NewsletterSubscriber {
            email: Email::parse("news@example.com").unwrap(),
        };

        let err = store.create(&subscriber).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(err.to_string().contains("DATABASE_URL is not set"));
        assert!(store.fetch_all::<NewsletterSubscriber>().await.is_err());
        assert!(store.database_name().is_none());
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn test_connect_without_url_is_unavailable() {
        let store = Store::connect(None);
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn test_connect_memory_url() {
        let url = SecretString::from("memory://nexora-dev");
        let store = Store::connect(Some(&url));
        assert!(store.is_connected());
        assert_eq!(store.database_name(), Some("nexora-dev"));
    }

    #[tokio::test]
    async fn test_connect_unreachable_postgres_is_connected() {
        let url = SecretString::from("postgres://nexora@127.0.0.1:1/x");
        let store = Store::connect(Some(&url));

        assert!(store.is_connected());
        assert_eq!(store.database_name(), Some("x"));
        assert!(matches!(
            store.fetch_all::<NewsletterSubscriber>().await,
            Err(StoreError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_connect_malformed_postgres_url_is_unavailable() {
        let url = SecretString::from("postgres://nexora@127.0.0.1:notaport/x");
        let store = Store::connect(Some(&url));
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn test_connect_unknown_scheme_is_unavailable() {
        let url = SecretString::from("redis://localhost:6379");
        let store = Store::connect(Some(&url));
        match store {
            Store::Unavailable { reason } => assert!(reason.contains("redis")),
            Store::Connected(_) => panic!("expected unavailable store"),
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trips_through_collection() {
        let store = Store::from_store(MemoryDocumentStore::new("test"));
        let subscriber = NewsletterSubscriber {
            email: Email::parse("news@example.com").unwrap(),
        };

        let id = store.create(&subscriber).await.unwrap();
        let documents = store.fetch_all::<NewsletterSubscriber>().await.unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].key.to_string(), id.as_str());
        assert_eq!(documents[0].fields.get("email"), Some(&json!("news@example.com")));
        assert_eq!(
            store.collection_names().await.unwrap(),
            ["newslettersubscriber"]
        );
    }
}
