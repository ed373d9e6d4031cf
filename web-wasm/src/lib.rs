//! Portfolio Web App (Leptos + WASM)

mod app;
mod api;
mod components;
pub mod dom;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    dom::clear_body();
    leptos::mount::mount_to_body(app::App);
}
