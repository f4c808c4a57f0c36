//! Gateway Catalog
//!
//! The ordered list of products the gateway displays. Declaration order is
//! display order, and the whole structure is loaded once and never mutated
//! while the page is up.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::product::{Accent, Product, ProductIcon, ProductStatus};

/// Insertion-ordered product list
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from products, preserving their order
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in display order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products in display order, as a slice
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Consume the catalog, yielding products in display order
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Look up a product by id. First match wins if ids collide.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of launchable products
    pub fn live_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_available()).count()
    }

    /// Check the catalog invariants: non-empty unique ids, non-empty
    /// names, and a destination url on every live product.
    ///
    /// Meant to run once at startup. Rendering itself tolerates a catalog
    /// that fails these checks; validation exists so a bad definition is
    /// reported instead of silently shipped.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (position, product) in self.products.iter().enumerate() {
            if product.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if product.name.is_empty() {
                return Err(CatalogError::EmptyName(product.id.clone()));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.is_available() && product.url.is_empty() {
                return Err(CatalogError::MissingUrl(product.id.clone()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Built-in Catalog
// ============================================================================

impl Catalog {
    /// The company catalog the gateway ships with.
    ///
    /// Two products today: the CRM is live, the HRMS is still being rolled
    /// out and stays locked until its cutover.
    pub fn builtin() -> Self {
        Self::from_products(vec![
            Product::new("crm", "Sales & CRM", "https://crm.example.com")
                .with_category("Customer Management")
                .with_description(
                    "Manage leads, customers, pipelines, invoices, and revenue \
                     in one unified CRM platform.",
                )
                .with_icon(ProductIcon::Dashboard)
                .with_accent(Accent::Blue),
            Product::new("hrms", "HRMS & Payroll", "https://hrms.example.com")
                .with_category("People Operations")
                .with_description(
                    "Handle employee onboarding, payroll, attendance, leave, \
                     and performance reviews securely.",
                )
                .with_status(ProductStatus::maintenance())
                .with_icon(ProductIcon::People)
                .with_accent(Accent::Emerald),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.live_count(), 1);
    }

    #[test]
    fn test_order_is_declaration_order() {
        let ids: Vec<_> = Catalog::builtin().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["crm", "hrms"]);
    }

    #[test]
    fn test_into_products_keeps_display_order() {
        let catalog = Catalog::from_products(vec![
            Product::new("erp", "ERP", "https://erp.example.com"),
            Product::new("crm", "Sales & CRM", "https://crm.example.com"),
            Product::new("bi", "Analytics", "https://bi.example.com"),
        ]);

        let ids: Vec<_> = catalog.into_products().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["erp", "crm", "bi"]);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new();
        assert!(catalog.validate().is_ok());
        assert!(catalog.is_empty());
        assert_eq!(catalog.live_count(), 0);
    }

    #[test]
    fn test_duplicate_ids_fail_validation_but_still_list() {
        let catalog = Catalog::from_products(vec![
            Product::new("crm", "Sales & CRM", "https://crm.example.com"),
            Product::new("crm", "Sales & CRM (old)", "https://old-crm.example.com"),
        ]);

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "crm"));

        // Listing is unaffected; both entries come back in order.
        assert_eq!(catalog.len(), 2);
        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sales & CRM", "Sales & CRM (old)"]);
    }

    #[test]
    fn test_live_product_without_url_fails_validation() {
        let catalog = Catalog::from_products(vec![Product::new("crm", "Sales & CRM", "")]);

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::MissingUrl(id) if id == "crm"));
    }

    #[test]
    fn test_locked_product_may_omit_url() {
        let catalog = Catalog::from_products(vec![
            Product::new("hrms", "HRMS & Payroll", "").with_status(ProductStatus::maintenance()),
        ]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_blank_identity_fields_fail_validation() {
        let no_id = Catalog::from_products(vec![Product::new("", "Nameless", "https://x")]);
        assert!(matches!(
            no_id.validate().unwrap_err(),
            CatalogError::EmptyId(0)
        ));

        let no_name = Catalog::from_products(vec![Product::new("x", "", "https://x")]);
        assert!(matches!(
            no_name.validate().unwrap_err(),
            CatalogError::EmptyName(id) if id == "x"
        ));
    }

    #[test]
    fn test_get_finds_first_match() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("hrms").map(|p| p.name.as_str()), Some("HRMS & Payroll"));
        assert!(catalog.get("erp").is_none());
    }
}
