use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Main content area. Its `margin-right` is shifted by the sidebar toggle.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let geometry = use_global_context().geometry;
    let style = format!(
        "margin-right: {}; transition: margin-right 0.3s;",
        geometry.reset_margin()
    );

    view! {
        <main data-zone="center" class="main" style=style>
            {children()}
        </main>
    }
}
