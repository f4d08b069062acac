//! Sidebar geometry: the sentinel offsets and the breakpoint, plus the pure
//! decision of what a single toggle writes.
//!
//! The markup and this module must agree on the values. The shell renders
//! its initial inline styles from the same [`SidebarGeometry`], and markup
//! rendered elsewhere can override them with `data-*` attributes on the
//! sidebar element.

/// Attribute on the sidebar element overriding the sidebar width (px).
pub const WIDTH_ATTRIBUTE: &str = "data-sidebar-width";
/// Attribute on the sidebar element overriding the breakpoint (px).
pub const BREAKPOINT_ATTRIBUTE: &str = "data-breakpoint";

pub const DEFAULT_WIDTH_PX: u32 = 250;
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Width of the sidebar and the viewport width at or below which the main
/// content is not shifted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SidebarGeometry {
    pub width_px: u32,
    pub breakpoint_px: u32,
}

impl Default for SidebarGeometry {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_WIDTH_PX,
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

impl SidebarGeometry {
    /// Build geometry from attribute lookups, falling back to the defaults
    /// for anything missing or not a plain pixel count.
    ///
    /// ```rust,ignore
    /// let geometry = SidebarGeometry::from_attributes(|name| element.get_attribute(name));
    /// ```
    pub fn from_attributes<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            width_px: parse_px(get(WIDTH_ATTRIBUTE)).unwrap_or(defaults.width_px),
            breakpoint_px: parse_px(get(BREAKPOINT_ATTRIBUTE)).unwrap_or(defaults.breakpoint_px),
        }
    }

    /// `right` of a hidden sidebar, e.g. `"-250px"`.
    pub fn closed_offset(&self) -> String {
        format!("-{}px", self.width_px)
    }

    /// `right` of a visible sidebar.
    pub fn open_offset(&self) -> String {
        "0px".to_string()
    }

    /// `margin-right` of the main area while the sidebar is open.
    pub fn compensating_margin(&self) -> String {
        format!("{}px", self.width_px)
    }

    /// `margin-right` of the main area while the sidebar is closed.
    pub fn reset_margin(&self) -> String {
        "0px".to_string()
    }

    /// Only viewports strictly wider than the breakpoint shift the main area.
    pub fn compensates(&self, viewport_width: f64) -> bool {
        viewport_width > f64::from(self.breakpoint_px)
    }
}

/// Accepts `"300"` and `"300px"`.
fn parse_px(raw: Option<String>) -> Option<u32> {
    let raw = raw?;
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed);
    digits.trim().parse().ok()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SidebarState {
    Open,
    Closed,
}

impl SidebarState {
    /// Only an exact match with the closed sentinel counts as closed. An
    /// element without an inline `right` reads as `""` and is therefore open.
    pub fn from_offset(offset: &str, geometry: &SidebarGeometry) -> Self {
        if offset == geometry.closed_offset() {
            SidebarState::Closed
        } else {
            SidebarState::Open
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Closed,
            SidebarState::Closed => SidebarState::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarState::Open => "open",
            SidebarState::Closed => "closed",
        }
    }
}

/// Style writes produced by one toggle.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ToggleOutcome {
    pub state: SidebarState,
    pub sidebar_right: String,
    /// `None` leaves the main area's margin untouched.
    pub main_margin_right: Option<String>,
}

/// Decide the writes for a sidebar currently at `current_offset`.
pub fn plan_toggle(
    current_offset: &str,
    viewport_width: f64,
    geometry: &SidebarGeometry,
) -> ToggleOutcome {
    let compensate = geometry.compensates(viewport_width);
    let state = SidebarState::from_offset(current_offset, geometry).toggled();

    match state {
        SidebarState::Open => ToggleOutcome {
            state,
            sidebar_right: geometry.open_offset(),
            main_margin_right: compensate.then(|| geometry.compensating_margin()),
        },
        SidebarState::Closed => ToggleOutcome {
            state,
            sidebar_right: geometry.closed_offset(),
            main_margin_right: compensate.then(|| geometry.reset_margin()),
        },
    }
}
