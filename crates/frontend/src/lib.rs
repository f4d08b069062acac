pub mod app;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

pub use shared::sidebar_toggle::{toggle_sidebar, SidebarGeometry, SidebarState, ToggleError};

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
