//! Workspace Gateway Frontend
//!
//! Leptos-based WASM frontend for the product gateway landing page.

mod app;
mod clock;
mod components;
mod launch;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
