//! Portfolio Web App (Leptos + WASM)

mod app;
mod components;
pub mod layout;
mod mail_relay;
mod widgets;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
