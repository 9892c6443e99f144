//! Item List Component
//!
//! Filterable, paginated grid of items. The caller owns the query (URL or
//! local state); this component loads whatever it is given.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::category_selector::CategorySelector;
use super::item_card::ItemCard;
use super::pagination_bar::PaginationBar;
use super::status::{ErrorBanner, LoadingSpinner};
use crate::context::use_app_context;
use crate::models::FILTER_CATEGORIES;
use crate::pagination::{is_past_end, results_summary};
use crate::query::{ListingQuery, SortOrder};
use crate::store::{new_listing_store, store_apply_page, store_fail, ListingStateStoreFields};

#[component]
pub fn ItemList(
    #[prop(into)] query: Signal<ListingQuery>,
    #[prop(into)] on_change: Callback<ListingQuery>,
    /// Heading above the filters
    #[prop(optional)]
    title: &'static str,
    /// Bump to reload the current page (e.g. after an item was added elsewhere)
    #[prop(optional, into)]
    refresh: Option<Signal<u32>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = new_listing_store();
    // responses to superseded queries are dropped
    let request_seq = StoredValue::new(0u64);

    let (search_input, set_search_input) = signal(String::new());

    Effect::new(move |_| {
        let q = query.get();
        if let Some(refresh) = refresh {
            refresh.track();
        }
        set_search_input.set(q.search.clone().unwrap_or_default());

        request_seq.update_value(|n| *n += 1);
        let seq = request_seq.get_value();
        store.loading().set(true);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_items(&q).await;
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(page) => store_apply_page(&store, page),
                Err(e) => {
                    log::error!("loading items failed: {}", e);
                    store_fail(&store, ctx.error_message(&e, "Failed to load items. Please try again later."));
                }
            }
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_change.run(query.get_untracked().with_search(&search_input.get_untracked()));
    };

    let on_sort = move |ev: web_sys::Event| {
        let sort = SortOrder::from_value(&event_target_value(&ev)).unwrap_or_default();
        on_change.run(query.get_untracked().with_sort(sort));
    };

    let current_category = Signal::derive(move || query.with(|q| q.category_label().to_string()));
    let error = Signal::derive(move || store.error().get());
    let is_empty = Memo::new(move |_| store.items().with(Vec::is_empty));

    view! {
        <section class="item-list">
            {(!title.is_empty()).then(|| view! { <h2 class="section-title">{title}</h2> })}

            <div class="item-filters">
                <form class="filter-search" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Search items..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                    />
                    <button type="submit">"Search"</button>
                </form>

                <select class="filter-sort" on:change=on_sort>
                    {SortOrder::ALL.iter().map(|sort| {
                        let sort = *sort;
                        view! {
                            <option value=sort.value() selected=move || query.with(|q| q.sort == sort)>
                                {sort.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <CategorySelector
                    current=current_category
                    options=FILTER_CATEGORIES
                    on_change=Callback::new(move |category: String| {
                        on_change.run(query.get_untracked().with_category(&category))
                    })
                />
            </div>

            <ErrorBanner message=error />

            {move || {
                if is_empty.get() {
                    if store.loading().get() {
                        return view! { <LoadingSpinner /> }.into_any();
                    }
                    if is_past_end(query.get().page, store.total_pages().get()) {
                        return view! {
                            <div class="empty-state">
                                <p>{move || format!("Page {} does not exist ({} items in total).", query.get().page + 1, store.total_items().get())}</p>
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    on:click=move |_| on_change.run(query.get_untracked().with_page(0))
                                >
                                    "Go to first page"
                                </button>
                            </div>
                        }.into_any();
                    }
                    return view! {
                        <div class="empty-state">
                            <p>{move || results_summary(0, store.total_items().get())}</p>
                            <p class="empty-hint">"Try another category or search term."</p>
                        </div>
                    }.into_any();
                }
                view! {
                    <p class="results-summary">
                        {move || results_summary(store.items().with(Vec::len), store.total_items().get())}
                    </p>
                    <div class=move || if store.loading().get() { "item-grid refreshing" } else { "item-grid" }>
                        <For
                            each=move || store.items().get()
                            key=|item| item.id
                            children=move |item| view! { <ItemCard item=item /> }
                        />
                    </div>
                }.into_any()
            }}

            <PaginationBar
                current=Signal::derive(move || store.current_page().get())
                total=Signal::derive(move || store.total_pages().get())
                on_page=Callback::new(move |page: u32| on_change.run(query.get_untracked().with_page(page)))
            />
        </section>
    }
}
