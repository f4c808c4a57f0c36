//! Product Descriptors
//!
//! Core data types for the gateway catalog. Products are declared at build
//! time and read-only afterwards; everything a card renders comes from one
//! of these records.

use serde::{Deserialize, Serialize};

/// Availability label attached to a product.
///
/// The vocabulary is open: one reserved label ([`ProductStatus::AVAILABLE`])
/// marks a product as launchable, and any other label is displayed verbatim
/// but treated as unavailable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductStatus(String);

impl ProductStatus {
    /// The one label that unlocks a product's launch control
    pub const AVAILABLE: &'static str = "LIVE";

    /// Create a status with an arbitrary label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The launchable status
    pub fn live() -> Self {
        Self(Self::AVAILABLE.into())
    }

    /// Common "temporarily offline" status
    pub fn maintenance() -> Self {
        Self("MAINTENANCE".into())
    }

    /// Label text shown on the card
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Whether this status unlocks the launch control.
    ///
    /// Exact match against [`Self::AVAILABLE`]; case variants and any
    /// other label count as unavailable.
    pub fn is_available(&self) -> bool {
        self.0 == Self::AVAILABLE
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbolic icon tag carried by a product.
///
/// Kept as plain data so the catalog stays free of rendering concerns;
/// the frontend resolves tags to glyphs with a lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductIcon {
    /// Dashboard grid glyph
    Dashboard,
    /// People glyph
    People,
}

/// Visual accent token for a card. Presentation only, never semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Blue,
    Emerald,
}

/// One entry in the gateway catalog: an independently hosted product with
/// a navigation target and an availability label.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    /// Short identifier, unique within the catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Grouping label shown above the name
    pub category: String,

    /// One-paragraph pitch shown on the card
    pub description: String,

    /// Absolute address opened when the product is launched
    pub url: String,

    /// Availability label
    pub status: ProductStatus,

    /// Symbolic icon tag
    pub icon: ProductIcon,

    /// Visual accent token
    pub accent: Accent,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            description: String::new(),
            url: url.into(),
            status: ProductStatus::live(),
            icon: ProductIcon::Dashboard,
            accent: Accent::Blue,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_icon(mut self, icon: ProductIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    /// Whether the launch control is enabled for this product
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Navigation target for an activation, if there is one.
    ///
    /// `Some` only when the product is available and carries a non-empty
    /// url. Unavailable products never navigate, whatever their url says.
    pub fn launch_url(&self) -> Option<&str> {
        if self.is_available() && !self.url.is_empty() {
            Some(&self.url)
        } else {
            None
        }
    }
}
