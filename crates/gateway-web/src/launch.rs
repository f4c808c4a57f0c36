//! Product Launch
//!
//! The one side effect in the gateway: opening a product's url in a new
//! browsing context when its card is activated.

use gateway_catalog::Product;

/// Route a card activation to `open`.
///
/// Returns `true` when a navigation request was issued. Unavailable
/// products and products without a destination never reach `open`, so an
/// activation that slips past a disabled control is a no-op.
pub fn dispatch<F>(product: &Product, open: F) -> bool
where
    F: FnOnce(&str),
{
    match product.launch_url() {
        Some(url) => {
            open(url);
            true
        }
        None => false,
    }
}

/// Open `url` in a new, independent browsing context.
///
/// Fire-and-forget: the handle to the new window is discarded, and the
/// opened context gets neither an `opener` reference nor a referrer.
/// Pop-up blocking is left to the browser.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_catalog::{Catalog, Product, ProductStatus};

    #[test]
    fn test_live_product_dispatches_exactly_once() {
        let product = Product::new("crm", "Sales & CRM", "https://crm.example.com");

        let mut opened = Vec::new();
        let issued = dispatch(&product, |url| opened.push(url.to_string()));

        assert!(issued);
        assert_eq!(opened, vec!["https://crm.example.com".to_string()]);
    }

    #[test]
    fn test_locked_product_never_dispatches() {
        let product = Product::new("hrms", "HRMS & Payroll", "https://hrms.example.com")
            .with_status(ProductStatus::maintenance());

        let mut opened = Vec::new();
        let issued = dispatch(&product, |url| opened.push(url.to_string()));

        assert!(!issued);
        assert!(opened.is_empty());
    }

    #[test]
    fn test_missing_destination_never_dispatches() {
        let product = Product::new("beta", "Beta Tool", "");

        let mut calls = 0;
        assert!(!dispatch(&product, |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_builtin_catalog_opens_only_the_live_product() {
        let mut opened = Vec::new();
        for product in Catalog::builtin().iter() {
            dispatch(product, |url| opened.push(url.to_string()));
        }

        assert_eq!(opened, vec!["https://crm.example.com".to_string()]);
    }
}
