//! Gateway Landing Page
//!
//! Renders the embedded catalog as a grid of product cards between a hero
//! header and a footer. One render pass over static data, no state.

use leptos::prelude::*;

use gateway_catalog::Catalog;

use crate::clock::{Clock, SystemClock};
use crate::components::ProductCard;

/// Footer copyright line for a given year
fn footer_line(year: i32) -> String {
    format!("© {} Your Company Name. All rights reserved.", year)
}

/// Gateway page component
#[component]
pub fn GatewayPage() -> impl IntoView {
    let footer = footer_line(SystemClock.current_year());

    view! {
        <div class="gateway">
            <header class="hero">
                <h1>"Company Workspace"</h1>
                <p class="tagline">
                    "Select a product to continue. Each product runs independently \
                     with enterprise-grade security and scalability."
                </p>
            </header>

            <section class="product-grid">
                {Catalog::builtin()
                    .into_products()
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </section>

            <footer class="footer">{footer}</footer>
        </div>
    }
}
