//! # gateway-catalog
//!
//! Product catalog for the company workspace gateway: the ordered list of
//! independently hosted products the landing page shows, with availability
//! semantics and startup validation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Catalog                               │
//! │  ┌───────────┐  ┌───────────┐         ┌───────────┐         │
//! │  │  Product  │  │  Product  │   ...   │  Product  │ ordered │
//! │  │  id, url  │  │           │         │           │         │
//! │  │  status   │  │           │         │           │         │
//! │  └───────────┘  └───────────┘         └───────────┘         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product is launchable exactly when its status carries the reserved
//! `LIVE` label; any other label renders as a locked card.

pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use product::{Accent, Product, ProductIcon, ProductStatus};
