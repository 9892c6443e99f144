//! Item Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, ItemDetail, Link, LoadingSpinner};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::Item;

#[component]
pub fn ItemPage(id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let (item, set_item) = signal::<Option<Item>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let api = ctx.api();
    spawn_local(async move {
        match api.get_item(id).await {
            Ok(loaded) => set_item.set(Some(loaded)),
            Err(ApiError::NotFound) => set_error.set(Some("Item not found".to_string())),
            Err(e) => {
                log::error!("loading item #{} failed: {}", id, e);
                set_error.set(Some(ctx.error_message(&e, "Failed to load item details.")));
            }
        }
    });

    view! {
        <div class="page page-item">
            {move || match (item.get(), error.get()) {
                (Some(item), _) => view! { <ItemDetail item=item /> }.into_any(),
                (None, Some(_)) => view! {
                    <ErrorBanner message=error />
                    <Link href="/items" class="back-link">"← Back to items"</Link>
                }.into_any(),
                (None, None) => view! { <LoadingSpinner /> }.into_any(),
            }}
        </div>
    }
}
