//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::link::Link;
use super::status::{ErrorBanner, NoticeBanner};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::router::Route;
use crate::validation::validate_login;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    let (notice, _) = signal(ctx.take_notice());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = (username.get_untracked(), password.get_untracked());
        if let Err(msg) = validate_login(&user, &pass) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.login(user.trim(), &pass).await {
                Ok(user) => {
                    ctx.current_user.set(Some(user));
                    ctx.navigate(Route::Home);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    let message = match e {
                        ApiError::Unauthorized => "Invalid username or password".to_string(),
                        other => ctx.error_message(&other, "Login failed. Please try again."),
                    };
                    set_error.set(Some(message));
                    set_password.set(String::new());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Welcome back"</h1>
            <NoticeBanner message=notice />
            <ErrorBanner message=error />
            <form class="auth-form" on:submit=on_submit>
                <label class="form-field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? " <Link href="/register">"Register"</Link>
            </p>
        </div>
    }
}
