//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::{StoreClient, StoreError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the record store client; there is no
/// other shared state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: StoreClient,
}

impl AppState {
    /// Create a new application state from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the record store client fails to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store = StoreClient::new(config.record_store_url)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { store }),
        })
    }

    /// Get a reference to the record store client.
    #[must_use]
    pub fn store(&self) -> &StoreClient {
        &self.inner.store
    }
}
