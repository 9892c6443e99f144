//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::theme::Theme;

/// Light/dark switch
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <label class="theme-toggle" title="Toggle dark mode">
            <span aria-hidden="true">"☀"</span>
            <input
                type="checkbox"
                class="toggle"
                prop:checked=move || ctx.theme.get() == Theme::Dark
                on:change=move |_| ctx.set_theme(ctx.theme.get_untracked().toggled())
            />
            <span aria-hidden="true">"☾"</span>
        </label>
    }
}
