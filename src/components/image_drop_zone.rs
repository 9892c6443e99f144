//! Image Drop Zone Component
//!
//! Drag-and-drop area plus file picker for item photos.

use leptos::prelude::*;
use leptos_filedrop::{
    create_filedrop_signals, files_from_list, make_on_dragenter, make_on_dragleave, make_on_dragover, make_on_drop,
};
use wasm_bindgen::JsCast;
use web_sys::File;

const ACCEPT: &str = "image/*";

/// Drop area that hands picked or dropped image files to `on_files`
#[component]
pub fn ImageDropZone(
    /// Photos already attached (existing + staged)
    #[prop(into)]
    count: Signal<usize>,
    max: usize,
    #[prop(into)] on_files: Callback<Vec<File>>,
) -> impl IntoView {
    let is_full = Signal::derive(move || count.get() >= max);
    let drop = create_filedrop_signals(Signal::derive(move || !is_full.get()));

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let files = input.files().map(|list| files_from_list(&list, ACCEPT)).unwrap_or_default();
        // allow picking the same file again after removing it
        input.set_value("");
        if !files.is_empty() {
            on_files.run(files);
        }
    };

    view! {
        <div
            class=move || {
                let mut c = "drop-zone".to_string();
                if drop.drag_active_read.get() { c.push_str(" active"); }
                if is_full.get() { c.push_str(" disabled"); }
                c
            }
            on:dragenter=make_on_dragenter(drop)
            on:dragover=make_on_dragover(drop)
            on:dragleave=make_on_dragleave(drop)
            on:drop=make_on_drop(drop, ACCEPT, on_files)
        >
            <label class="drop-zone-label">
                <span class="drop-zone-link">"Upload images"</span>
                <input
                    class="sr-only"
                    type="file"
                    accept=ACCEPT
                    multiple=true
                    disabled=move || is_full.get()
                    on:change=on_input_change
                />
                <span>" or drag and drop"</span>
            </label>
            <p class="drop-zone-hint">{format!("PNG, JPG, GIF up to 10MB each (max {} images)", max)}</p>
            <p class="drop-zone-count">{move || format!("{} / {}", count.get(), max)}</p>
        </div>
    }
}
