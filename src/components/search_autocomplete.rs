//! Search Autocomplete Component
//!
//! Navbar search box with item suggestions fetched as the user types.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Item;
use crate::query::ListingQuery;
use crate::router::Route;
use crate::search::{move_selection, should_suggest, SuggestionGate, SuggestionKey};

/// Search input with suggestion dropdown
///
/// Props:
/// - on_done: called after the user searched or picked a suggestion (closes mobile menu)
#[component]
pub fn SearchAutocomplete(#[prop(optional, into)] on_done: Option<Callback<()>>) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let min_chars = config.suggestion_min_chars;
    let limit = config.suggestion_limit;
    let debounce_ms = config.suggestion_debounce_ms;

    let gate = StoredValue::new(SuggestionGate::new());
    let (input_value, set_input_value) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<Item>::new());
    let (show_dropdown, set_show_dropdown) = signal(false);
    let (loading, set_loading) = signal(false);
    let (selected_idx, set_selected_idx) = signal::<Option<usize>>(None);

    let is_current = move |ticket: u64| gate.try_with_value(|g| g.is_current(ticket)).unwrap_or(false);

    let reset = move || {
        gate.with_value(|g| g.cancel());
        set_input_value.set(String::new());
        set_suggestions.set(Vec::new());
        set_show_dropdown.set(false);
        set_loading.set(false);
        set_selected_idx.set(None);
        if let Some(cb) = on_done {
            cb.run(());
        }
    };

    // Debounced lookup; only the newest keystroke may publish results
    let lookup = move |term: String| {
        let ticket = gate.with_value(|g| g.begin());
        set_selected_idx.set(None);
        if !should_suggest(&term, min_chars) {
            set_suggestions.set(Vec::new());
            set_show_dropdown.set(false);
            set_loading.set(false);
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if !is_current(ticket) {
                return;
            }
            set_loading.set(true);
            set_show_dropdown.set(true);
            let result = api.suggest_items(term.trim(), limit).await;
            if !is_current(ticket) {
                return;
            }
            set_loading.set(false);
            match result {
                Ok(items) => set_suggestions.set(items),
                Err(e) => {
                    log::debug!("suggestions failed: {}", e);
                    set_suggestions.set(Vec::new());
                    set_show_dropdown.set(false);
                }
            }
        });
    };

    let open_item = move |id: u64| {
        reset();
        ctx.navigate(Route::ItemDetail(id));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let term = input_value.get_untracked();
        if term.trim().is_empty() {
            return;
        }
        reset();
        ctx.navigate(Route::Items(ListingQuery::new(ctx.page_size()).with_search(&term)));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = SuggestionKey::from_key(&ev.key()) else {
            return;
        };
        let items = suggestions.get_untracked();
        let visible = show_dropdown.get_untracked() && !items.is_empty();
        match key {
            SuggestionKey::Down | SuggestionKey::Up if visible => {
                ev.prevent_default();
                set_selected_idx.set(move_selection(selected_idx.get_untracked(), key, items.len()));
            }
            SuggestionKey::Enter if visible => {
                // with nothing highlighted Enter submits the search form
                if let Some(i) = move_selection(selected_idx.get_untracked(), key, items.len()) {
                    ev.prevent_default();
                    open_item(items[i].id);
                }
            }
            SuggestionKey::Escape => {
                set_show_dropdown.set(false);
                set_selected_idx.set(None);
            }
            _ => {}
        }
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <div class="search-input-wrapper">
                <input
                    type="text"
                    placeholder="Search for anything..."
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_input_value.set(value.clone());
                        lookup(value);
                    }
                    on:focus=move |_| {
                        if !suggestions.get_untracked().is_empty() {
                            set_show_dropdown.set(true);
                        }
                    }
                    on:blur=move |_| set_show_dropdown.set(false)
                    on:keydown=on_keydown
                />

                <Show when=move || show_dropdown.get()>
                    <div class="autocomplete-list">
                        {move || {
                            if loading.get() {
                                return view! { <div class="autocomplete-empty">"Loading..."</div> }.into_any();
                            }
                            let items = suggestions.get();
                            if items.is_empty() {
                                return view! { <div class="autocomplete-empty">"No results found"</div> }.into_any();
                            }
                            let selected = selected_idx.get();
                            items.into_iter().enumerate().map(|(i, item)| {
                                let id = item.id;
                                let thumb = item.cover_image().map(|url| ctx.asset_url(url));
                                view! {
                                    <div
                                        class=if selected == Some(i) { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            open_item(id);
                                        }
                                    >
                                        {match thumb {
                                            Some(src) => view! { <img class="autocomplete-thumb" src=src alt=item.name.clone() /> }.into_any(),
                                            None => view! { <div class="autocomplete-thumb placeholder">"🖼"</div> }.into_any(),
                                        }}
                                        <span class="autocomplete-name">{item.name.clone()}</span>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }}
                    </div>
                </Show>
            </div>
            <button type="submit">"Search"</button>
        </form>
    }
}
