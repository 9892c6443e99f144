//! Give / Edit Item Pages

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, ItemForm, Link, LoadingSpinner};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::Item;

#[component]
pub fn NewItemPage() -> impl IntoView {
    view! {
        <div class="page page-editor">
            <h1 class="page-title">"Give Away an Item"</h1>
            <ItemForm />
        </div>
    }
}

/// Loads the item and only offers the form to its owner
#[component]
pub fn EditItemPage(id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let (item, set_item) = signal::<Option<Item>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let api = ctx.api();
    spawn_local(async move {
        match api.get_item(id).await {
            Ok(loaded) => {
                let owned = ctx.current_user.with_untracked(|u| u.as_ref().is_some_and(|u| loaded.owned_by(u)));
                if owned {
                    set_item.set(Some(loaded));
                } else {
                    log::warn!("refusing to edit item #{} owned by someone else", id);
                    set_error.set(Some("You can only edit your own items".to_string()));
                }
            }
            Err(ApiError::NotFound) => set_error.set(Some("Item not found".to_string())),
            Err(e) => {
                log::error!("loading item #{} for editing failed: {}", id, e);
                set_error.set(Some(ctx.error_message(&e, "Failed to load item details.")));
            }
        }
    });

    view! {
        <div class="page page-editor">
            <h1 class="page-title">"Edit Item"</h1>
            {move || match (item.get(), error.get()) {
                (Some(item), _) => view! { <ItemForm item=item /> }.into_any(),
                (None, Some(_)) => view! {
                    <ErrorBanner message=error />
                    <Link href="/items/my-items" class="back-link">"← Back to my items"</Link>
                }.into_any(),
                (None, None) => view! { <LoadingSpinner /> }.into_any(),
            }}
        </div>
    }
}
