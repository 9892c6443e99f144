//! Items Page
//!
//! Full listing; filters and page live in the URL.

use leptos::prelude::*;

use crate::components::ItemList;
use crate::context::use_app_context;
use crate::query::ListingQuery;
use crate::router::Route;

#[component]
pub fn ItemsPage() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.page_size();

    // keep the last listing query while the route moves elsewhere
    let query = Memo::new(move |prev: Option<&ListingQuery>| match ctx.route.get() {
        Route::Items(q) => q,
        _ => prev.cloned().unwrap_or_else(|| ListingQuery::new(page_size)),
    });

    let heading = move || {
        query.with(|q| match (&q.category, &q.search) {
            (_, Some(search)) => format!("Results for \"{}\"", search),
            (Some(category), None) => category.clone(),
            (None, None) => "All Items".to_string(),
        })
    };

    view! {
        <div class="page page-items">
            <h1 class="page-title">{heading}</h1>
            <ItemList
                query=query
                on_change=Callback::new(move |next: ListingQuery| ctx.navigate(Route::Items(next)))
            />
        </div>
    }
}
