//! Home Page
//!
//! Welcome banner, category tiles and the newest items. Paging stays on the
//! home page; changing a filter moves on to the full listing. Logged-in users
//! get a quick "give item" form next to the list.

use leptos::prelude::*;

use crate::components::{ItemForm, ItemList, Link};
use crate::context::use_app_context;
use crate::models::{Item, CATEGORIES};
use crate::query::ListingQuery;
use crate::router::{self, Route};

fn category_icon(category: &str) -> &'static str {
    match category {
        "Electronics" => "💻",
        "Furniture" => "🛋",
        "Clothing" => "👕",
        "Sports" => "⚽",
        "Books" => "📚",
        "Toys" => "🧸",
        "Vehicles" => "🚲",
        "Beauty" => "💄",
        "Services" => "🛠",
        _ => "📦",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.page_size();
    let query = RwSignal::new(ListingQuery::new(page_size));
    let (refresh, set_refresh) = signal(0u32);

    let on_change = Callback::new(move |next: ListingQuery| {
        if query.with_untracked(|q| q.same_filters(&next)) {
            query.set(next);
            router::scroll_to_top();
        } else {
            ctx.navigate(Route::Items(next));
        }
    });

    let on_saved = Callback::new(move |item: Item| {
        log::debug!("item #{} added from home page", item.id);
        query.set(ListingQuery::new(page_size));
        set_refresh.update(|n| *n += 1);
    });

    let tiles = CATEGORIES
        .iter()
        .map(|category| {
            let href = Route::Items(ListingQuery::new(page_size).with_category(category)).href();
            view! {
                <Link href=href class="category-tile">
                    <span class="category-icon">{category_icon(category)}</span>
                    <span class="category-name">{*category}</span>
                </Link>
            }
        })
        .collect_view();

    view! {
        <div class="page page-home">
            <section class="hero">
                <h1>"Give things a second life"</h1>
                <p>"Find free items near you, or give away what you no longer need."</p>
                <div class="hero-actions">
                    <Link href="/items" class="btn btn-primary">"Browse Items"</Link>
                    {move || {
                        if ctx.is_logged_in() {
                            view! { <Link href="/items/new" class="btn btn-secondary">"Give Item"</Link> }.into_any()
                        } else {
                            view! { <Link href="/login" class="btn btn-secondary">"Login to give items"</Link> }.into_any()
                        }
                    }}
                </div>
            </section>

            <section class="category-tiles">{tiles}</section>

            <div class=move || if ctx.is_logged_in() { "home-grid with-sidebar" } else { "home-grid" }>
                <ItemList query=query on_change=on_change title="Latest Items" refresh=refresh />
                <Show when=move || ctx.is_logged_in()>
                    <aside class="home-sidebar">
                        <h2 class="section-title">"Give an Item"</h2>
                        <ItemForm on_saved=on_saved compact=true />
                    </aside>
                </Show>
            </div>
        </div>
    }
}
