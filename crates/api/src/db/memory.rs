//! In-process document store.
//!
//! Selected with `DATABASE_URL=memory://<name>`. Contents live only as long
//! as the process; useful for local development and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use nexora_core::DocumentId;

use super::{Document, DocumentStore, StoreError};

/// A document store backed by an in-memory map of collections.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    /// Database name used when the connection string does not give one.
    pub const DEFAULT_NAME: &'static str = "nexora";

    /// Create an empty store.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::default(),
        }
    }

    /// Insert documents that already carry keys, as if provisioned directly
    /// in the store.
    pub async fn preload(&self, collection: &str, documents: impl IntoIterator<Item = Document>) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn insert_one(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError> {
        let document = Document::new(fields);
        let id = DocumentId::new(document.key.to_string());

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .iter()
            .filter(|(_, documents)| !documents.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}
