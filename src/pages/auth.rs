//! Login and Register Pages

use leptos::prelude::*;

use crate::components::{LoginForm, RegisterForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="page page-auth">
            <LoginForm />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="page page-auth">
            <RegisterForm />
        </div>
    }
}
