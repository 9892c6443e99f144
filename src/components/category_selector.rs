//! Category Selector Component
//!
//! Row of category buttons with the active one highlighted.

use leptos::prelude::*;

/// Category buttons; `options` are shown in order
#[component]
pub fn CategorySelector(
    #[prop(into)] current: Signal<String>,
    options: &'static [&'static str],
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-selector">
            {options.iter().map(|value| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || current.get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                        on:click=move |_| on_change.run(val_clone.clone())
                    >
                        {*value}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
