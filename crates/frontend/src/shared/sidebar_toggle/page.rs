//! The document the toggle runs against: element lookup by selector and the
//! viewport width.

use super::errors::ToggleError;
use super::geometry::{SidebarGeometry, SidebarState};
use super::style_host::{apply_toggle, read_state, StyleHost};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const SIDEBAR_SELECTOR: &str = ".sidebar";
pub const MAIN_SELECTOR: &str = ".main";

pub trait Page {
    type Element: StyleHost;

    /// First element matching `selector`, like `querySelector`.
    fn find(&self, selector: &'static str) -> Result<Option<Self::Element>, ToggleError>;
    fn viewport_width(&self) -> Result<f64, ToggleError>;
}

/// The live `window.document`.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn current() -> Result<Self, ToggleError> {
        let window = web_sys::window().ok_or(ToggleError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(ToggleError::Unavailable("document"))?;
        Ok(Self { window, document })
    }
}

impl Page for BrowserPage {
    type Element = HtmlElement;

    fn find(&self, selector: &'static str) -> Result<Option<HtmlElement>, ToggleError> {
        match self
            .document
            .query_selector(selector)
            .map_err(ToggleError::browser)?
        {
            Some(el) => el
                .dyn_into::<HtmlElement>()
                .map(Some)
                .map_err(|_| ToggleError::NotHtmlElement(selector)),
            None => Ok(None),
        }
    }

    fn viewport_width(&self) -> Result<f64, ToggleError> {
        let width = self.window.inner_width().map_err(ToggleError::browser)?;
        // a non-numeric innerWidth never compensates
        Ok(width.as_f64().unwrap_or(0.0))
    }
}

fn require<P: Page>(page: &P, selector: &'static str) -> Result<P::Element, ToggleError> {
    page.find(selector)?
        .ok_or(ToggleError::MissingElement(selector))
}

fn geometry_of<E: StyleHost>(sidebar: &E) -> SidebarGeometry {
    SidebarGeometry::from_attributes(|name| sidebar.attribute(name))
}

/// Toggle the sidebar on `page`. Both elements are looked up before anything
/// is written, so a missing `.main` leaves the sidebar untouched.
pub fn toggle_on<P: Page>(page: &P) -> Result<SidebarState, ToggleError> {
    let sidebar = require(page, SIDEBAR_SELECTOR)?;
    let main = require(page, MAIN_SELECTOR)?;
    let geometry = geometry_of(&sidebar);
    let viewport_width = page.viewport_width()?;

    let state = apply_toggle(&sidebar, &main, viewport_width, &geometry)?;
    log::debug!(
        "sidebar {} (viewport {}px, breakpoint {}px)",
        state.as_str(),
        viewport_width,
        geometry.breakpoint_px
    );
    Ok(state)
}

pub fn state_on<P: Page>(page: &P) -> Result<SidebarState, ToggleError> {
    let sidebar = require(page, SIDEBAR_SELECTOR)?;
    read_state(&sidebar, &geometry_of(&sidebar))
}
