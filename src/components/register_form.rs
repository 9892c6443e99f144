//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::link::Link;
use super::status::ErrorBanner;
use crate::context::use_app_context;
use crate::router::Route;
use crate::validation::validate_registration;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let mail = email.get_untracked();
        let pass = password.get_untracked();
        if let Err(msg) = validate_registration(&user, &mail, &pass, &confirm.get_untracked()) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.register(user.trim(), mail.trim(), &pass).await {
                Ok(message) => {
                    ctx.notice.set(Some(message));
                    ctx.navigate(Route::Login);
                }
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    set_error.set(Some(ctx.error_message(&e, "Registration failed. Please try again.")));
                    set_submitting.set(false);
                }
            }
        });
    };

    let field = move |label: &'static str,
                      kind: &'static str,
                      autocomplete: &'static str,
                      value: ReadSignal<String>,
                      set_value: WriteSignal<String>| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-card">
            <h1>"Create an account"</h1>
            <ErrorBanner message=error />
            <form class="auth-form" on:submit=on_submit>
                {field("Username", "text", "username", username, set_username)}
                {field("Email", "email", "email", email, set_email)}
                {field("Password", "password", "new-password", password, set_password)}
                {field("Confirm Password", "password", "new-password", confirm, set_confirm)}
                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? " <Link href="/login">"Login"</Link>
            </p>
        </div>
    }
}
