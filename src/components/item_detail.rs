//! Item Detail Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::comment_section::CommentSection;
use super::delete_confirm_button::DeleteConfirmButton;
use super::image_gallery::ImageGallery;
use super::link::Link;
use super::status::ErrorBanner;
use crate::context::use_app_context;
use crate::format::{avatar_url, format_date_long};
use crate::models::Item;
use crate::query::ListingQuery;
use crate::router::Route;

/// Full view of one item: photos, facts, owner controls and comments
#[component]
pub fn ItemDetail(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let item_id = item.id;
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);

    let images: Vec<String> = item.image_urls.iter().map(|url| ctx.asset_url(url)).collect();
    let owner = item.user.clone();
    let is_owner = {
        let item = item.clone();
        Memo::new(move |_| ctx.current_user.with(|u| u.as_ref().is_some_and(|u| item.owned_by(u))))
    };

    let on_delete = Callback::new(move |_: ()| {
        set_deleting.set(true);
        set_error.set(None);
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_item(item_id).await {
                Ok(()) => ctx.navigate(Route::MyItems),
                Err(e) => {
                    log::error!("deleting item #{} failed: {}", item_id, e);
                    set_error.set(Some(ctx.error_message(&e, "Failed to delete item. Please try again.")));
                    set_deleting.set(false);
                }
            }
        });
    });

    let category_href = Route::Items(ListingQuery::new(ctx.page_size()).with_category(&item.category)).href();
    let contact = owner.as_ref().filter(|u| !u.email.is_empty()).map(|u| {
        format!("mailto:{}?subject={}", u.email, crate::query::encode_component(&format!("Giveaway: {}", item.name)))
    });

    let category_label = item.category.clone();

    view! {
        <article class="item-detail">
            <Link href="/items" class="back-link">"← Back to items"</Link>
            <ErrorBanner message=error />

            <div class="item-detail-grid">
                <ImageGallery images=images alt=item.name.clone() />

                <div class="item-detail-info">
                    <div class="item-detail-badges">
                        <Link href=category_href class="badge badge-category">{category_label}</Link>
                        {item.reserved.then(|| view! { <span class="badge badge-reserved">"Reserved"</span> })}
                    </div>
                    <h1 class="item-detail-title">{item.name.clone()}</h1>

                    <dl class="item-facts">
                        {item.location_label().map(|l| view! {
                            <dt>"Location"</dt>
                            <dd>{l.to_string()}</dd>
                        })}
                        <dt>"Posted"</dt>
                        <dd>{format_date_long(item.created_at.as_deref())}</dd>
                    </dl>

                    <div class="item-description">
                        <h2>"Description"</h2>
                        <p>{item.description.clone()}</p>
                    </div>

                    {owner.map(|u| view! {
                        <div class="giver">
                            <img class="avatar" src=avatar_url(&u.username) alt="" />
                            <div>
                                <span class="muted">"Given away by"</span>
                                <strong>{u.username.clone()}</strong>
                            </div>
                        </div>
                    })}

                    <Show
                        when=move || is_owner.get()
                        fallback=move || {
                            contact.clone().map(|href| view! {
                                <a class="btn btn-primary" href=href>"Contact Giver"</a>
                            })
                        }
                    >
                        <div class="owner-actions">
                            <Link href=Route::EditItem(item_id).href() class="btn btn-secondary">"Edit"</Link>
                            <Show
                                when=move || !deleting.get()
                                fallback=|| view! { <span class="muted">"Deleting..."</span> }
                            >
                                <DeleteConfirmButton button_class="btn btn-danger" on_confirm=on_delete />
                            </Show>
                            <Link href="/items/my-items" class="btn btn-ghost">"My Items"</Link>
                        </div>
                    </Show>
                </div>
            </div>

            <CommentSection item_id=item_id />
        </article>
    }
}
