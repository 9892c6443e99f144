//! My Items Page
//!
//! Items given away by the logged-in user, with edit and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, ErrorBanner, ItemCard, Link, LoadingSpinner};
use crate::context::use_app_context;
use crate::models::Page;
use crate::router::Route;
use crate::store::{new_listing_store, store_apply_page, store_fail, store_remove_item, ListingStateStoreFields};

#[component]
pub fn MyItemsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = new_listing_store();

    let api = ctx.api();
    spawn_local(async move {
        match api.my_items().await {
            Ok(items) => {
                let total_items = items.len() as u64;
                store_apply_page(&store, Page { items, current_page: 0, total_items, total_pages: 1 });
            }
            Err(e) => {
                log::error!("loading my items failed: {}", e);
                store_fail(&store, ctx.error_message(&e, "Failed to load your items."));
            }
        }
    });

    let is_empty = Memo::new(move |_| store.items().with(Vec::is_empty));

    let delete_item = move |id: u64| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_item(id).await {
                Ok(()) => {
                    if !store_remove_item(&store, id) {
                        log::debug!("item #{} deleted after leaving the page", id);
                    }
                }
                Err(e) => {
                    log::error!("deleting item #{} failed: {}", id, e);
                    store_fail(&store, ctx.error_message(&e, "Failed to delete item. Please try again."));
                }
            }
        });
    };

    view! {
        <div class="page page-my-items">
            <div class="page-header">
                <h1 class="page-title">"My Items"</h1>
                <Link href="/items/new" class="btn btn-primary">"Give Item"</Link>
            </div>

            <ErrorBanner message=Signal::derive(move || store.error().get()) />

            {move || {
                if store.loading().get() {
                    return view! { <LoadingSpinner /> }.into_any();
                }
                if is_empty.get() {
                    return view! {
                        <div class="empty-state">
                            <p>"You haven't given away any items yet."</p>
                            <Link href="/items/new" class="btn btn-secondary">"Give your first item"</Link>
                        </div>
                    }.into_any();
                }
                view! {
                    <p class="results-summary">
                        {move || format!("{} item(s)", store.total_items().get())}
                    </p>
                    <div class="item-grid">
                        <For
                            each=move || store.items().get()
                            key=|item| item.id
                            children=move |item| {
                                let id = item.id;
                                view! {
                                    <ItemCard item=item>
                                        <Link href=Route::EditItem(id).href() class="btn btn-secondary btn-sm">
                                            "Edit"
                                        </Link>
                                        <DeleteConfirmButton
                                            button_class="btn btn-danger btn-sm"
                                            on_confirm=Callback::new(move |_: ()| delete_item(id))
                                        />
                                    </ItemCard>
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}
