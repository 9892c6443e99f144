//! Navigation Bar Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::link::Link;
use super::search_autocomplete::SearchAutocomplete;
use super::theme_toggle::ThemeToggle;
use crate::context::use_app_context;
use crate::format::{avatar_url, initial};
use crate::query::ListingQuery;
use crate::router::Route;

/// Categories offered as quick links next to "Items"
const QUICK_CATEGORIES: [&str; 4] = ["Electronics", "Furniture", "Clothing", "Vehicles"];

/// Delay before the user menu closes once the pointer leaves it
const MENU_CLOSE_DELAY_MS: u32 = 200;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.page_size();

    let (mobile_open, set_mobile_open) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    // bumped on every enter/leave so a pending close can tell it is stale
    let menu_generation = StoredValue::new(0u64);

    let close_menus = Callback::new(move |_: ()| {
        set_mobile_open.set(false);
        set_menu_open.set(false);
    });

    let open_menu = move || {
        menu_generation.update_value(|g| *g += 1);
        set_menu_open.set(true);
    };
    let close_menu_later = move || {
        menu_generation.update_value(|g| *g += 1);
        let generation = menu_generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(MENU_CLOSE_DELAY_MS).await;
            if menu_generation.try_get_value() == Some(generation) {
                set_menu_open.set(false);
            }
        });
    };

    let on_logout = move |_| {
        set_menu_open.set(false);
        set_mobile_open.set(false);
        ctx.logout();
    };

    let link_class = move |href: &'static str| {
        if ctx.route.with(|r| r.is_active(href)) { "nav-link active" } else { "nav-link" }
    };

    let category_links = QUICK_CATEGORIES
        .iter()
        .map(|category| {
            let href = Route::Items(ListingQuery::new(page_size).with_category(category)).href();
            view! {
                <Link href=href class="nav-link nav-category" on_follow=close_menus>
                    {*category}
                </Link>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link href="/" class="navbar-brand" on_follow=close_menus>
                    <span class="brand-mark">"🎁"</span>
                    <span class="brand-name">"Giveaway"</span>
                </Link>

                <button
                    class="navbar-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { "✕" } else { "☰" }}
                </button>

                <div class=move || if mobile_open.get() { "navbar-menu open" } else { "navbar-menu" }>
                    <div class="navbar-links">
                        <a
                            href="/items"
                            class=move || link_class("/items")
                            on:click=move |ev| {
                                ev.prevent_default();
                                set_mobile_open.set(false);
                                ctx.navigate(Route::Items(ListingQuery::new(page_size)));
                            }
                        >
                            "Items"
                        </a>
                        {category_links}
                    </div>

                    <Show when=move || ctx.is_logged_in()>
                        <div class="navbar-search">
                            <SearchAutocomplete on_done=close_menus />
                        </div>
                    </Show>

                    <div class="navbar-actions">
                        <ThemeToggle />
                        <Show
                            when=move || ctx.is_logged_in()
                            fallback=move || view! {
                                <Link href="/login" class="btn btn-ghost" on_follow=close_menus>"Login"</Link>
                                <Link href="/register" class="btn btn-primary" on_follow=close_menus>"Register"</Link>
                            }
                        >
                            <div
                                class="user-menu"
                                on:mouseenter=move |_| open_menu()
                                on:mouseleave=move |_| close_menu_later()
                            >
                                <button
                                    class="user-menu-trigger"
                                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                >
                                    {move || {
                                        let user = ctx.current_user.get();
                                        let name = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
                                        view! {
                                            <img class="avatar" src=avatar_url(&name) alt=initial(Some(&name)) />
                                            <span class="user-name">{name}</span>
                                        }
                                    }}
                                </button>
                                <Show when=move || menu_open.get()>
                                    <div class="user-menu-dropdown">
                                        <Link href="/items/my-items" class="menu-item" on_follow=close_menus>
                                            "My Items"
                                        </Link>
                                        <Link href="/items/new" class="menu-item" on_follow=close_menus>
                                            "Give Item"
                                        </Link>
                                        <button class="menu-item" on:click=on_logout>"Logout"</button>
                                    </div>
                                </Show>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}
