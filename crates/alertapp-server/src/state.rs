//! Shared state for request handlers.

use std::sync::Arc;

use alertapp_store::AlertStore;

use crate::config::ServerConfig;

/// State shared by every request handler.
#[derive(Debug)]
pub struct AppState {
    /// Server configuration.
    config: ServerConfig,
    /// Alert storage backend.
    store: Arc<dyn AlertStore>,
}

impl AppState {
    /// Create a new state around an injected store.
    pub fn new(config: ServerConfig, store: Arc<dyn AlertStore>) -> Self {
        Self { config, store }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the alert store.
    #[must_use]
    pub fn store(&self) -> &dyn AlertStore {
        self.store.as_ref()
    }

    /// Get a shared handle to the alert store.
    #[must_use]
    pub fn store_handle(&self) -> Arc<dyn AlertStore> {
        Arc::clone(&self.store)
    }
}
