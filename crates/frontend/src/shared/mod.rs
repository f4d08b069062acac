pub mod icons;
pub mod sidebar_toggle;
