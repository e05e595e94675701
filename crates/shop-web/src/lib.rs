//! bookshop Web Frontend
//!
//! Leptos-based WASM frontend for the checkout demo. Card collection and
//! payment confirmation happen inside Stripe's Payment Element; this crate
//! never sees card data.

mod api;
mod app;
mod pages;
mod stripe;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
