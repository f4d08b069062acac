use crate::shared::sidebar_toggle::{self, SidebarGeometry, SidebarState};
use leptos::prelude::*;

/// Layout-wide state shared through context.
///
/// The DOM owns the sidebar's real state (its inline `right`); `sidebar` is a
/// mirror refreshed from the DOM after every toggle so components can react.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub geometry: SidebarGeometry,
    pub sidebar: RwSignal<SidebarState>,
}

impl AppGlobalContext {
    pub fn new(geometry: SidebarGeometry) -> Self {
        Self {
            geometry,
            // the shell renders the sidebar at its closed offset
            sidebar: RwSignal::new(SidebarState::Closed),
        }
    }

    pub fn toggle_sidebar(&self) {
        match sidebar_toggle::toggle_sidebar() {
            Ok(state) => self.sidebar.set(state),
            Err(err) => log::error!("sidebar toggle failed: {}", err),
        }
    }

    /// Re-read the mirror from the DOM, e.g. after JS glue toggled it.
    pub fn sync_sidebar(&self) {
        match sidebar_toggle::current_state() {
            Ok(state) => self.sidebar.set(state),
            Err(err) => log::warn!("sidebar state unavailable: {}", err),
        }
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar.get() == SidebarState::Open
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
