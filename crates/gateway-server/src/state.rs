//! Application State

use std::sync::Arc;

use gateway_catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The product catalog served to clients
    pub catalog: Arc<Catalog>,
}
