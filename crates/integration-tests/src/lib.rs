//! Integration tests for the Nexora Synergy API.
//!
//! Each test starts the full router (middleware included) on an ephemeral
//! port and talks to it over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests (memory and failing stores)
//! cargo test -p nexora-integration-tests
//!
//! # PostgreSQL-backed tests
//! TEST_DATABASE_URL=postgres://localhost/nexora_test \
//!     cargo test -p nexora-integration-tests -- --ignored
//! ```

use std::net::SocketAddr;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::{Map, Value};
use tokio::net::TcpListener;

use nexora_api::db::{Document, DocumentStore, MemoryDocumentStore, StoreError};
use nexora_api::{ApiConfig, AppState, Store};
use nexora_core::DocumentId;

/// A running API server bound to a local ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Store,
}

impl TestServer {
    /// Start a server over `store` with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(store: Store) -> Self {
        Self::start_with_config(ApiConfig::default(), store).await
    }

    /// Start a server over `store` with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start_with_config(config: ApiConfig, store: Store) -> Self {
        let state = AppState::new(config, store.clone(), Utc::now());
        let app = nexora_api::router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            addr,
            client: Client::new(),
            store,
        }
    }

    /// Start a server over an empty in-memory store.
    pub async fn with_memory_store() -> Self {
        Self::start(Store::from_store(MemoryDocumentStore::new("nexora-test"))).await
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// A store whose every operation fails, as if the connection dropped after
/// startup.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    /// Error text returned by every operation.
    pub const REASON: &'static str = "connection reset by peer";
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn database_name(&self) -> &str {
        "nexora"
    }

    async fn insert_one(
        &self,
        _collection: &str,
        _fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError> {
        Err(StoreError::Unavailable(Self::REASON.to_string()))
    }

    async fn find_all(&self, _collection: &str) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable(Self::REASON.to_string()))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable(Self::REASON.to_string()))
    }
}
