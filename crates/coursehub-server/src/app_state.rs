// ABOUTME: Shared application state for the coursehub HTTP server.
// ABOUTME: Holds the course store behind a lock and the identity provider client.

use std::sync::Arc;

use coursehub_store::CourseStore;
use tokio::sync::Mutex;

use crate::identity::IdentityClient;

/// Shared application state accessible by all Axum handlers.
/// The store's SQLite connection is single-threaded, so it lives behind a
/// tokio Mutex; user operations go straight to the identity provider.
pub struct AppState {
    pub store: Mutex<CourseStore>,
    pub identity: IdentityClient,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: CourseStore, identity: IdentityClient) -> Self {
        Self {
            store: Mutex::new(store),
            identity,
        }
    }
}
