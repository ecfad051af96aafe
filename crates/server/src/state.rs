//! Application state shared across handlers.

use std::sync::Arc;

use crate::{config::ServerConfig, db::AdminStore, services::PasswordHasher};

/// Application state shared across all handlers.
///
/// Cheap to clone: everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Arc<dyn AdminStore>,
    hasher: PasswordHasher,
}

impl AppState {
    /// Build the state from its parts.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn AdminStore>, hasher: PasswordHasher) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                hasher,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn store(&self) -> &dyn AdminStore {
        self.inner.store.as_ref()
    }

    #[must_use]
    pub fn hasher(&self) -> &PasswordHasher {
        &self.inner.hasher
    }
}
