//! Error Types

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog validation errors
///
/// The catalog is embedded configuration, so every variant here is a
/// defect in the product definitions rather than a runtime condition.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two entries share the same id
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// A launchable product has nowhere to navigate
    #[error("Product '{0}' is live but has no url")]
    MissingUrl(String),

    /// An entry has no id at all
    #[error("Product at position {0} has an empty id")]
    EmptyId(usize),

    /// An entry has no display name
    #[error("Product '{0}' has an empty name")]
    EmptyName(String),
}
