//! Page Layout Component

use leptos::prelude::*;

use super::log_panel::LogPanel;
use super::navbar::Navbar;
use crate::context::use_app_context;

/// Navbar, page content and footer
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let show_log = use_app_context().config().show_log;

    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">{children()}</main>
            <footer class="footer">
                <p>"Giveaway · give things a second life"</p>
                {show_log.then(|| view! { <LogPanel /> })}
            </footer>
        </div>
    }
}
