use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Sidebar container. Starts at the closed offset; after mount only the
/// toggle writes its `right`.
///
/// The `data-*` attributes carry the geometry the toggle reads back, so they
/// must stay named as in `sidebar_toggle::geometry`.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let geometry = use_global_context().geometry;
    let style = format!(
        "position: fixed; top: 0; right: {}; width: {}px; height: 100%; overflow-y: auto; transition: right 0.3s;",
        geometry.closed_offset(),
        geometry.width_px,
    );

    view! {
        <aside
            data-zone="left"
            class="sidebar"
            data-sidebar-width=geometry.width_px.to_string()
            data-breakpoint=geometry.breakpoint_px.to_string()
            style=style
        >
            {children()}
        </aside>
    }
}
