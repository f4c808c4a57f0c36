//! Workspace Gateway Server
//!
//! Axum server that hosts the compiled WASM frontend and exposes a
//! read-only view of the product catalog.

pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use gateway_catalog::Catalog;

use crate::handlers::{get_catalog, health_check};
use crate::state::AppState;

/// Build the gateway router around a catalog.
///
/// Unknown paths fall through to the static frontend bundle in
/// `static_dir`, so the WASM app owns everything the API does not.
pub fn build_app(catalog: Catalog, static_dir: &str) -> Router {
    let state = AppState {
        catalog: Arc::new(catalog),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & catalog
        .route("/health", get(health_check))
        .route("/api/catalog", get(get_catalog))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
