//! Log Panel Component
//!
//! Collapsible footer view of the most recent log lines.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(browser_logger::recent_lines());

    view! {
        <details
            class="log-panel"
            on:toggle=move |_| set_lines.set(browser_logger::recent_lines())
        >
            <summary>"Recent log"</summary>
            <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| set_lines.set(browser_logger::recent_lines())>
                "Refresh"
            </button>
            <pre class="log-lines">
                {move || lines.get().join("\n")}
            </pre>
        </details>
    }
}
