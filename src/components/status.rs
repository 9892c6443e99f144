//! Status Components
//!
//! Loading spinner, error and notice banners.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}

/// Red banner, rendered only while `message` holds text
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="banner banner-error" role="alert">{msg}</div>
        })
    }
}

#[component]
pub fn NoticeBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="banner banner-notice" role="status">{msg}</div>
        })
    }
}
