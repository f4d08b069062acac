//! TopHeader component - application top navigation bar.
//!
//! Contains the application title and the sidebar toggle button.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let is_sidebar_visible = move || ctx.is_sidebar_open();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Projects"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("x")
                    } else {
                        icon("menu")
                    }}
                </button>
            </div>
        </div>
    }
}
