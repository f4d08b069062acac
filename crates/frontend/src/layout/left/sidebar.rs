//! Sidebar panel content: close button and navigation.

use crate::app::ROUTES;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavLink {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

/// Only pages the app actually renders.
const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "/",
        label: "Dashboard",
        icon: "home",
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__header">
                <button
                    class="app-sidebar__close"
                    title="Close navigation"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("x")}
                </button>
            </div>
            <nav>
                {NAV_LINKS.iter().map(|link| {
                    view! {
                        <a class="app-sidebar__item" href=link.href>
                            <div class="app-sidebar__item-content">
                                {icon(link.icon)}
                                <span>{link.label}</span>
                            </div>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
