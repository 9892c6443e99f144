//! Pagination Bar Component

use leptos::prelude::*;

use crate::pagination::{has_next, has_prev, page_window};

/// Number of page buttons shown at once
const WINDOW: u32 = 7;

/// Previous / numbered / next buttons. Pages are zero-based; labels are 1-based.
#[component]
pub fn PaginationBar(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="page-btn"
                    disabled=move || !has_prev(current.get())
                    on:click=move |_| on_page.run(current.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    let active = current.get();
                    page_window(active, total.get(), WINDOW)
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class=if page == active { "page-btn active" } else { "page-btn" }
                                    on:click=move |_| on_page.run(page)
                                >
                                    {page + 1}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled=move || !has_next(current.get(), total.get())
                    on:click=move |_| on_page.run(current.get_untracked() + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
