//! HTTP bootstrap for the API service.
//!
//! Serves a health check on `/health` and a "running" message on every other
//! path, both carrying the release identifier from the `VERSION` file.

pub mod config;
pub mod error;
pub mod routes;
pub mod version;

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

use version::VersionFile;

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub version: VersionFile,
}

impl AppState {
    pub fn new(version: VersionFile) -> Self {
        Self { version }
    }
}

/// Creates the Axum application router.
///
/// `/health` is matched exactly for every method; everything else is served
/// by the status fallback.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", any(routes::health::check))
        .fallback(routes::status::running)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
