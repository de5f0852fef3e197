//! `PostgreSQL` as a document store.
//!
//! # Table: `documents`
//!
//! | column       | type          | notes                          |
//! |--------------|---------------|--------------------------------|
//! | `id`         | `UUID`        | internal key, primary key      |
//! | `seq`        | `BIGINT`      | identity, insertion order      |
//! | `collection` | `TEXT`        | collection name                |
//! | `body`       | `JSONB`       | record fields                  |
//! | `created_at` | `TIMESTAMPTZ` | defaults to `now()`            |
//!
//! Connections are opened on demand, so a database that is down at startup
//! only fails the calls made while it is down. The table is created with
//! `IF NOT EXISTS` before the first statement that needs it. Content rows
//! for the read-only collections can be inserted directly, e.g.
//! `INSERT INTO documents (id, collection, body) VALUES (gen_random_uuid(), 'service', '{...}')`.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;
use tokio::sync::OnceCell;
use uuid::Uuid;

use nexora_core::DocumentId;

use super::{Document, DocumentStore, StoreError};

const CREATE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS documents (
        id          UUID PRIMARY KEY,
        seq         BIGINT GENERATED ALWAYS AS IDENTITY,
        collection  TEXT NOT NULL,
        body        JSONB NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
";

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_seq_idx ON documents (collection, seq)";

/// How long a call waits for a pooled connection before failing.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a lazily connecting `PostgreSQL` pool.
///
/// No connection is attempted here; the first query opens one.
#[must_use]
pub fn create_pool(options: PgConnectOptions, acquire_timeout: Duration) -> PgPool {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(acquire_timeout)
        .connect_lazy_with(options)
}

/// Document store over a `PostgreSQL` pool.
#[derive(Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
    database_name: String,
    schema_ready: OnceCell<()>,
}

impl PgDocumentStore {
    /// Build a store for `database_url` without contacting the server.
    ///
    /// The database name comes from the connection string; without one,
    /// `PostgreSQL` uses the user name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the connection string cannot be
    /// parsed.
    pub fn connect(database_url: &SecretString) -> Result<Self, StoreError> {
        Self::with_timeout(database_url, ACQUIRE_TIMEOUT)
    }

    /// Like [`PgDocumentStore::connect`], with a custom acquire timeout.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the connection string cannot be
    /// parsed.
    pub fn with_timeout(
        database_url: &SecretString,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let options: PgConnectOptions = database_url.expose_secret().parse()?;
        let database_name = options
            .get_database()
            .unwrap_or_else(|| options.get_username())
            .to_string();

        Ok(Self {
            pool: create_pool(options, acquire_timeout),
            database_name,
            schema_ready: OnceCell::new(),
        })
    }

    /// Make sure the `documents` table exists. Runs once per process; a
    /// failed attempt is retried on the next call.
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.schema_ready
            .get_or_try_init(|| async {
                sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
                sqlx::query(CREATE_INDEX).execute(&self.pool).await?;
                tracing::debug!("documents table ready");
                Ok::<(), sqlx::Error>(())
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn insert_one(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError> {
        self.ensure_schema().await?;
        let key = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(key)
            .bind(collection)
            .bind(Json(Value::Object(fields)))
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection, id = %key, "Document inserted");
        Ok(DocumentId::new(key.to_string()))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.ensure_schema().await?;
        let rows: Vec<(Uuid, Json<Value>)> = sqlx::query_as(
            "SELECT id, body FROM documents WHERE collection = $1 ORDER BY seq",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(key, Json(body))| match body {
                Value::Object(fields) => Ok(Document { key, fields }),
                _ => Err(StoreError::DataCorruption(format!(
                    "document {key} in {collection} is not a JSON object"
                ))),
            })
            .collect()
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.ensure_schema().await?;
        let names = sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }
}
