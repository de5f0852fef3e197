//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use nexora_core::SeedContent;

use crate::config::ApiConfig;
use crate::db::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// store handle, configuration, and fallback content.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Store,
    fallback: SeedContent,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Fallback content is built once here; the default blog post is dated
    /// at `started_at`.
    #[must_use]
    pub fn new(config: ApiConfig, store: Store, started_at: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                fallback: SeedContent::defaults(started_at),
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the document store handle.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the fallback content.
    #[must_use]
    pub fn fallback(&self) -> &SeedContent {
        &self.inner.fallback
    }
}
