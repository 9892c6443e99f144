//! Giveaway Frontend App
//!
//! Root component: context, route guard, history and storage listeners,
//! and the page switch.

use leptos::ev;
use leptos::prelude::*;

use crate::components::Layout;
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::pages::{
    EditItemPage, HomePage, ItemPage, ItemsPage, LoginPage, MyItemsPage, NewItemPage, NotFoundPage, RegisterPage,
};
use crate::router::{self, Route};
use crate::session::{LOGGED_IN_KEY, TOKEN_KEY, USER_KEY};
use crate::theme::{Theme, THEME_KEY};

/// Which page component is mounted. Listing filters are not part of it, so
/// changing them updates the items page instead of rebuilding it.
#[derive(Clone, Copy, PartialEq, Debug)]
enum PageView {
    Home,
    Login,
    Register,
    Items,
    NewItem,
    Item(u64),
    EditItem(u64),
    MyItems,
    NotFound,
}

impl From<&Route> for PageView {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => PageView::Home,
            Route::Login => PageView::Login,
            Route::Register => PageView::Register,
            Route::Items(_) => PageView::Items,
            Route::NewItem => PageView::NewItem,
            Route::ItemDetail(id) => PageView::Item(*id),
            Route::EditItem(id) => PageView::EditItem(*id),
            Route::MyItems => PageView::MyItems,
            Route::NotFound => PageView::NotFound,
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config));
    let ctx = use_app_context();

    // Theme attribute follows the signal
    Effect::new(move |_| ctx.theme.get().apply());

    // Redirect away from pages the current login state may not see
    Effect::new(move |_| {
        let logged_in = ctx.is_logged_in();
        let route = ctx.route.get();
        if let Some(target) = route.guard(logged_in) {
            log::debug!("guard: {} -> {}", route.href(), target.href());
            router::replace_history(&target.href());
            ctx.route.set(target);
        }
    });

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| {
        let (path, search) = router::current_location();
        ctx.route.set(Route::parse(&path, &search, ctx.page_size()));
    });

    // Login, logout or theme change in another tab
    let _ = window_event_listener(ev::storage, move |e| match e.key().as_deref() {
        Some(USER_KEY) | Some(LOGGED_IN_KEY) | Some(TOKEN_KEY) | None => ctx.refresh_session(),
        Some(THEME_KEY) => ctx.theme.set(Theme::load(&crate::session::BrowserStorage)),
        Some(_) => {}
    });

    let page = Memo::new(move |_| ctx.route.with(|route| PageView::from(route)));

    view! {
        <Layout>
            {move || match page.get() {
                PageView::Home => view! { <HomePage /> }.into_any(),
                PageView::Login => view! { <LoginPage /> }.into_any(),
                PageView::Register => view! { <RegisterPage /> }.into_any(),
                PageView::Items => view! { <ItemsPage /> }.into_any(),
                PageView::NewItem => view! { <NewItemPage /> }.into_any(),
                PageView::Item(id) => view! { <ItemPage id=id /> }.into_any(),
                PageView::EditItem(id) => view! { <EditItemPage id=id /> }.into_any(),
                PageView::MyItems => view! { <MyItemsPage /> }.into_any(),
                PageView::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListingQuery;

    #[test]
    fn test_listing_filters_keep_the_same_page_view() {
        let plain = Route::Items(ListingQuery::new(12));
        let filtered = Route::Items(ListingQuery::new(12).with_category("Books").with_page(2));
        assert_eq!(PageView::from(&plain), PageView::from(&filtered));
        assert_ne!(PageView::from(&Route::ItemDetail(1)), PageView::from(&Route::ItemDetail(2)));
        assert_eq!(PageView::from(&Route::EditItem(4)), PageView::EditItem(4));
    }
}
