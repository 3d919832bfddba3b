//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::CatalogStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog store is held behind the
/// [`CatalogStore`] trait so tests can swap in the in-memory store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Arc<dyn CatalogStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &dyn CatalogStore {
        self.inner.store.as_ref()
    }
}
