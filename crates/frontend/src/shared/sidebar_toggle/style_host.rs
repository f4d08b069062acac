//! Inline-style access for the two elements the toggle touches.

use super::errors::ToggleError;
use super::geometry::{plan_toggle, SidebarGeometry, SidebarState};

pub const OFFSET_PROPERTY: &str = "right";
pub const MARGIN_PROPERTY: &str = "margin-right";

/// An element whose inline style can be read and written.
///
/// Property names use the CSS spelling (`margin-right`, not `marginRight`).
pub trait StyleHost {
    /// Empty string when the property is not set inline.
    fn style_value(&self, property: &str) -> Result<String, ToggleError>;
    fn set_style_value(&self, property: &str, value: &str) -> Result<(), ToggleError>;
    fn attribute(&self, name: &str) -> Option<String>;
}

impl StyleHost for web_sys::HtmlElement {
    fn style_value(&self, property: &str) -> Result<String, ToggleError> {
        self.style()
            .get_property_value(property)
            .map_err(ToggleError::browser)
    }

    fn set_style_value(&self, property: &str, value: &str) -> Result<(), ToggleError> {
        self.style()
            .set_property(property, value)
            .map_err(ToggleError::browser)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

impl<T: StyleHost + ?Sized> StyleHost for &T {
    fn style_value(&self, property: &str) -> Result<String, ToggleError> {
        (**self).style_value(property)
    }

    fn set_style_value(&self, property: &str, value: &str) -> Result<(), ToggleError> {
        (**self).set_style_value(property, value)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

/// Flip `sidebar` between its sentinel offsets and keep `main`'s margin in
/// step with it when the viewport is wider than the breakpoint.
///
/// Returns the state the sidebar is in afterwards.
pub fn apply_toggle<S, M>(
    sidebar: &S,
    main: &M,
    viewport_width: f64,
    geometry: &SidebarGeometry,
) -> Result<SidebarState, ToggleError>
where
    S: StyleHost + ?Sized,
    M: StyleHost + ?Sized,
{
    let current = sidebar.style_value(OFFSET_PROPERTY)?;
    let outcome = plan_toggle(&current, viewport_width, geometry);

    sidebar.set_style_value(OFFSET_PROPERTY, &outcome.sidebar_right)?;
    if let Some(margin) = &outcome.main_margin_right {
        main.set_style_value(MARGIN_PROPERTY, margin)?;
    }

    Ok(outcome.state)
}

/// State implied by the sidebar's current inline offset.
pub fn read_state<S>(sidebar: &S, geometry: &SidebarGeometry) -> Result<SidebarState, ToggleError>
where
    S: StyleHost + ?Sized,
{
    let current = sidebar.style_value(OFFSET_PROPERTY)?;
    Ok(SidebarState::from_offset(&current, geometry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sidebar_toggle::testing::FakeElement;

    fn closed_page() -> (FakeElement, FakeElement) {
        (
            FakeElement::with(OFFSET_PROPERTY, "-250px"),
            FakeElement::with(MARGIN_PROPERTY, "0px"),
        )
    }

    #[test]
    fn test_open_wide() {
        let (sidebar, main) = closed_page();
        let state = apply_toggle(&sidebar, &main, 1280.0, &SidebarGeometry::default()).unwrap();

        assert_eq!(state, SidebarState::Open);
        assert_eq!(sidebar.get(OFFSET_PROPERTY), "0px");
        assert_eq!(main.get(MARGIN_PROPERTY), "250px");
    }

    #[test]
    fn test_open_narrow_leaves_margin() {
        let (sidebar, main) = closed_page();
        apply_toggle(&sidebar, &main, 768.0, &SidebarGeometry::default()).unwrap();

        assert_eq!(sidebar.get(OFFSET_PROPERTY), "0px");
        assert_eq!(main.get(MARGIN_PROPERTY), "0px");
        assert!(main.writes.borrow().is_empty());
    }

    #[test]
    fn test_close_resets_margin_only_when_wide() {
        let g = SidebarGeometry::default();

        let sidebar = FakeElement::with(OFFSET_PROPERTY, "0px");
        let main = FakeElement::with(MARGIN_PROPERTY, "250px");
        let state = apply_toggle(&sidebar, &main, 1024.0, &g).unwrap();
        assert_eq!(state, SidebarState::Closed);
        assert_eq!(sidebar.get(OFFSET_PROPERTY), "-250px");
        assert_eq!(main.get(MARGIN_PROPERTY), "0px");

        let sidebar = FakeElement::with(OFFSET_PROPERTY, "0px");
        let main = FakeElement::with(MARGIN_PROPERTY, "250px");
        apply_toggle(&sidebar, &main, 500.0, &g).unwrap();
        assert_eq!(sidebar.get(OFFSET_PROPERTY), "-250px");
        assert_eq!(main.get(MARGIN_PROPERTY), "250px");
    }

    #[test]
    fn test_two_toggles_restore_original() {
        let g = SidebarGeometry::default();
        for width in [320.0, 768.0, 1920.0] {
            let (sidebar, main) = closed_page();
            apply_toggle(&sidebar, &main, width, &g).unwrap();
            apply_toggle(&sidebar, &main, width, &g).unwrap();

            assert_eq!(sidebar.get(OFFSET_PROPERTY), "-250px", "width {}", width);
            assert_eq!(main.get(MARGIN_PROPERTY), "0px", "width {}", width);
        }
    }

    #[test]
    fn test_resize_between_calls() {
        // opened on a phone, closed on a desktop: the margin is reset anyway
        let g = SidebarGeometry::default();
        let (sidebar, main) = closed_page();

        apply_toggle(&sidebar, &main, 400.0, &g).unwrap();
        assert_eq!(main.get(MARGIN_PROPERTY), "0px");

        apply_toggle(&sidebar, &main, 1400.0, &g).unwrap();
        assert_eq!(sidebar.get(OFFSET_PROPERTY), "-250px");
        assert_eq!(main.writes.borrow().as_slice(), [MARGIN_PROPERTY]);
    }

    #[test]
    fn test_read_state() {
        let g = SidebarGeometry::default();
        assert_eq!(
            read_state(&FakeElement::with(OFFSET_PROPERTY, "-250px"), &g).unwrap(),
            SidebarState::Closed
        );
        assert_eq!(
            read_state(&FakeElement::default(), &g).unwrap(),
            SidebarState::Open
        );
    }
}
