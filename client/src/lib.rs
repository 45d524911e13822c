//! Leptos front end for the freelance services site.
//!
//! ARCHITECTURE
//! ============
//! - [`app`]: document shell, session wiring, route table.
//! - [`components`]: navbar and footer shared by every route.
//! - [`pages`]: one module per route.
//! - [`state`]: plain state structs held in signals.
//! - [`util`]: form helpers and the `localStorage` session store.
//!
//! Built with `hydrate` for the browser bundle and `ssr` when linked into the
//! server.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
