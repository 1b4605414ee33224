//! # xplore-ui
//!
//! Leptos + WASM frontend for the XploreLCT event discovery platform.
//!
//! The crate is organized around three core pieces: the session store
//! (`state::session`), the API gateway with its one-shot refresh protocol
//! (`net::client`), and the route guard (`components::guards`). Pages and
//! the remaining components sit on top of those through Leptos contexts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
