pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::use_global_context;
use leptos::prelude::*;
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |          Content (.main)     | Sidebar    |
/// |                              | (.sidebar) |
/// +------------------------------------------+
/// ```
///
/// The sidebar is fixed to the right edge and slides in over the content;
/// on wide viewports the toggle also shifts `.main` out from under it.
#[component]
pub fn Shell<S, C>(sidebar: S, center: C) -> impl IntoView
where
    S: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_global_context();

    // elements exist once the view is mounted; pick up whatever state the
    // markup (or early JS glue) left them in
    Effect::new(move |_| ctx.sync_sidebar());

    view! {
        <div class="app-layout">
            <TopHeader />

            <center::Center>
                {center()}
            </center::Center>

            <left::Left>
                {sidebar()}
            </left::Left>
        </div>
    }
}
