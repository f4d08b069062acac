use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::sidebar_toggle::SidebarGeometry;
use leptos::prelude::*;

/// Paths the app renders a page for. Everything is served from `/`.
pub const ROUTES: &[&str] = &["/"];

#[component]
pub fn App() -> impl IntoView {
    // Shared by the header button, the sidebar markup and the toggle.
    provide_context(AppGlobalContext::new(SidebarGeometry::default()));

    view! {
        <Shell
            sidebar=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Home /> }.into_any()
        />
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Dashboard"</h1>
        </section>
    }
}
