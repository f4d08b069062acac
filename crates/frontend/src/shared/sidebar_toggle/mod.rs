//! Sidebar toggle.
//!
//! Slides the `.sidebar` panel in and out by rewriting its inline `right`
//! offset, and shifts `.main` by the sidebar width on viewports wider than
//! the breakpoint. The DOM is the only state: every call reads the current
//! offset and samples `window.innerWidth` afresh.
//!
//! Leptos components call [`toggle_sidebar`] directly. For hand-written
//! markup the crate exports `toggleSidebar` from the wasm-bindgen JS module;
//! that is a module export, not a global, so inline `onclick="toggleSidebar()"`
//! handlers need the loader to assign it first:
//!
//! ```js
//! import init, { toggleSidebar } from "./frontend.js";
//! await init();
//! window.toggleSidebar = toggleSidebar;
//! ```

pub mod errors;
pub mod geometry;
pub mod page;
pub mod style_host;
#[cfg(test)]
pub(crate) mod testing;

pub use errors::ToggleError;
pub use geometry::{SidebarGeometry, SidebarState};
pub use page::{MAIN_SELECTOR, SIDEBAR_SELECTOR};

use page::{state_on, toggle_on, BrowserPage};
use wasm_bindgen::prelude::*;

/// Toggle the sidebar and return the state it ends up in.
///
/// Fails when either element is missing from the document.
pub fn toggle_sidebar() -> Result<SidebarState, ToggleError> {
    toggle_on(&BrowserPage::current()?)
}

/// JS entry point: `toggleSidebar()`. Errors are thrown as exceptions.
#[wasm_bindgen(js_name = toggleSidebar)]
pub fn toggle_sidebar_js() -> Result<(), JsValue> {
    toggle_sidebar().map(|_| ()).map_err(JsValue::from)
}

/// Current state of the sidebar as implied by its inline offset.
pub fn current_state() -> Result<SidebarState, ToggleError> {
    state_on(&BrowserPage::current()?)
}
