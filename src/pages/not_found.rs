use leptos::prelude::*;

use crate::components::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <Link href="/" class="btn btn-primary">"Back to home"</Link>
        </div>
    }
}
