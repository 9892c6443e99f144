//! In-app Link Component
//!
//! Anchor that navigates through the router instead of reloading the page.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Client-side link; modified clicks (new tab etc.) fall through to the browser
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate_href(&target);
        if let Some(cb) = on_follow {
            cb.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
