//! HTTP Handlers

use axum::{extract::State, Json};
use serde::Serialize;

use gateway_catalog::Product;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub products_total: usize,
    pub products_live: usize,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        products_total: state.catalog.len(),
        products_live: state.catalog.live_count(),
    })
}

/// Read-only catalog listing, in display order
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let products = state.catalog.products().to_vec();

    Json(CatalogResponse {
        total: products.len(),
        products,
    })
}
