//! Rêveoulé storefront frontend
//!
//! Client-side rendered Leptos app hosting the storefront navigation bar.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;
use utils::constants::LOG_LEVEL;

#[wasm_bindgen(start)]
pub fn main() {
    // Route panics to the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    log::info!("storefront starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
