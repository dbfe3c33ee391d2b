#[allow(clippy::unit_arg, clippy::unused_unit)]
mod app;
pub mod back_to_top;
pub mod clipboard;
pub mod menu;
pub mod nav;
pub mod reveal;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
///
/// This function is called automatically when the WASM module is loaded in the
/// browser. It sets up panic hooks and console logging, mounts the Leptos
/// application to the document body, and then attaches the scroll-triggered
/// reveal animations to the rendered page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(app::App);

    // The reveal observers query the rendered DOM, so they attach after mount.
    // A failure here disables the animations but leaves the page functional.
    if let Err(err) = reveal::init() {
        log::warn!("scroll animations disabled: {err:#}");
    }

    log::info!("AutoTrend - Local Linear Trend Extraction for Time Series");
    log::info!("GitHub: https://github.com/chotanansub/autotrend");
}
