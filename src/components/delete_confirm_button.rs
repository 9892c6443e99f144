//! Delete Confirm Button Component
//!
//! Inline delete confirmation instead of a blocking `confirm()` dialog.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows the `label` button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `label` - Text of the initial button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    ev.prevent_default();
                    set_confirm_delete.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this item?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    title="Yes, delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ev.prevent_default();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    title="Keep it"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ev.prevent_default();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
