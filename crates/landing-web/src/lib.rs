//! Real-Time Landing Page Frontend
//!
//! Leptos-based WASM frontend: header, hero, lead capture form, success
//! card and footer, mounted once per page variant.

mod app;
mod components;
mod config;
mod host;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
