//! Application state management
//!
//! The shared state passed to every handler via Axum's State extractor. It
//! is built once at startup and never mutated.

use std::sync::Arc;

use crate::{
    config::Config,
    constants::collections,
    db::{Collection, DocumentStore},
    services::SessionCodec,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    store: Arc<dyn DocumentStore>,
    assignments: Collection,
    submissions: Collection,
    sessions: SessionCodec,
    config: Config,
}

impl AppState {
    /// Create a new application state over an opened store
    pub fn new(store: Arc<dyn DocumentStore>, config: Config) -> Self {
        let sessions = SessionCodec::new(&config.session.secret, config.session.expiry_days);

        Self {
            inner: Arc::new(AppStateInner {
                assignments: Collection::new(store.clone(), collections::ASSIGNMENTS),
                submissions: Collection::new(store.clone(), collections::SUBMISSIONS),
                store,
                sessions,
                config,
            }),
        }
    }

    /// Get the underlying document store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.inner.store
    }

    /// Accessor for the `assignments` collection
    pub fn assignments(&self) -> &Collection {
        &self.inner.assignments
    }

    /// Accessor for the `submissions` collection
    pub fn submissions(&self) -> &Collection {
        &self.inner.submissions
    }

    /// Get the session token codec
    pub fn sessions(&self) -> &SessionCodec {
        &self.inner.sessions
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
