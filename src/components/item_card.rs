//! Item Card Component

use leptos::prelude::*;

use super::link::Link;
use crate::context::use_app_context;
use crate::format::{format_date, truncate};
use crate::models::Item;
use crate::router::Route;

const DESCRIPTION_PREVIEW_CHARS: usize = 90;

/// Grid tile linking to the item's detail page
#[component]
pub fn ItemCard(
    item: Item,
    /// Extra controls rendered under the card body (e.g. edit/delete on "My Items")
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = Route::ItemDetail(item.id).href();
    let image = item.cover_image().map(|url| ctx.asset_url(url));
    let location = item.location_label().map(str::to_string);
    let date = format_date(item.created_at.as_deref());
    let giver = item.user.as_ref().map(|u| u.username.clone());
    let image_count = item.image_urls.len();
    let image_alt = item.name.clone();

    view! {
        <article class="item-card">
            <Link href=href.clone() class="item-card-image">
                {match image {
                    Some(src) => view! { <img src=src alt=image_alt loading="lazy" /> }.into_any(),
                    None => view! { <div class="image-placeholder">"No image"</div> }.into_any(),
                }}
                {item.reserved.then(|| view! { <span class="badge badge-reserved">"Reserved"</span> })}
                {(image_count > 1).then(|| view! { <span class="badge badge-count">"📷 " {image_count}</span> })}
            </Link>
            <div class="item-card-body">
                <span class="badge badge-category">{item.category.clone()}</span>
                <h3 class="item-card-title">
                    <Link href=href>{item.name.clone()}</Link>
                </h3>
                <p class="item-card-description">{truncate(&item.description, DESCRIPTION_PREVIEW_CHARS)}</p>
                <div class="item-card-meta">
                    {location.map(|l| view! { <span class="meta-location">"📍 " {l}</span> })}
                    {(!date.is_empty()).then(|| view! { <span class="meta-date">{date}</span> })}
                    {giver.map(|g| view! { <span class="meta-giver">"by " {g}</span> })}
                </div>
                {children.map(|actions| view! { <div class="item-card-actions">{actions()}</div> })}
            </div>
        </article>
    }
}
