use std::sync::Arc;

use crate::sessions::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable session backend. Default: InMemorySessionStore.
    pub store: Arc<dyn SessionStore>,
}
