//! UI Components

use leptos::prelude::*;

use gateway_catalog::{Accent, Product, ProductIcon, ProductStatus};

use crate::launch;

/// Classes for a card's icon box, keyed by accent token
fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "icon-box accent-blue",
        Accent::Emerald => "icon-box accent-emerald",
    }
}

/// Classes for the status pill.
///
/// A function of availability alone: two unavailable products look the
/// same however their labels differ, and only the `LIVE` sentinel gets
/// the live styling.
fn status_class(status: &ProductStatus) -> &'static str {
    if status.is_available() {
        "status status-live"
    } else {
        "status status-down"
    }
}

/// Resolve a symbolic icon tag to its inline glyph
fn icon_glyph(icon: ProductIcon) -> impl IntoView {
    match icon {
        ProductIcon::Dashboard => view! {
            <svg width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="3" y="3" width="7" height="9" rx="1"/>
                <rect x="14" y="3" width="7" height="5" rx="1"/>
                <rect x="14" y="12" width="7" height="9" rx="1"/>
                <rect x="3" y="16" width="7" height="5" rx="1"/>
            </svg>
        }
        .into_any(),
        ProductIcon::People => view! {
            <svg width="22" height="22" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            </svg>
        }
        .into_any(),
    }
}

/// Status pill showing a product's availability label
#[component]
pub fn StatusBadge(status: ProductStatus) -> impl IntoView {
    let class = status_class(&status);

    view! {
        <span class=class>
            <span class="status-dot"></span>
            {status.label().to_string()}
        </span>
    }
}

/// Product card
///
/// A pure function of its product: identity, status pill, description, and
/// one launch control. Activating an available card opens the product url
/// in a new tab; on a locked card the control is disabled and activation
/// goes nowhere.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let available = product.is_available();
    let status = product.status.clone();
    let icon_box = accent_class(product.accent);
    let glyph = icon_glyph(product.icon);
    let target = product.clone();

    view! {
        <article class="product-card">
            <div class="card-head">
                <div class=icon_box>{glyph}</div>
                <div class="card-title">
                    <p class="category">{product.category.clone()}</p>
                    <h2>{product.name.clone()}</h2>
                </div>
                <StatusBadge status=status />
            </div>

            <p class="description">{product.description.clone()}</p>

            <div class="card-actions">
                <button
                    class="btn btn-launch"
                    disabled=move || !available
                    on:click=move |_| {
                        launch::dispatch(&target, launch::open_in_new_tab);
                    }
                >
                    {if available { "Open Workspace" } else { "Unavailable" }}
                    {available.then(|| view! {
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none"
                            stroke="currentColor" stroke-width="2" stroke-linecap="round"
                            stroke-linejoin="round">
                            <path d="M5 12h14M12 5l7 7-7 7"/>
                        </svg>
                    })}
                </button>
                <Show when=move || available>
                    <span class="hint">"Opens in new tab"</span>
                </Show>
            </div>
        </article>
    }
}
