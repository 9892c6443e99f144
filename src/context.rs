//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::User;
use crate::router::{self, Route};
use crate::session::browser_session;
use crate::theme::Theme;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Page currently shown
    pub route: RwSignal<Route>,
    /// Logged-in user, mirrored from local storage
    pub current_user: RwSignal<Option<User>>,
    pub theme: RwSignal<Theme>,
    /// One-shot message shown on the next page (e.g. after registering)
    pub notice: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (path, search) = router::current_location();
        let route = Route::parse(&path, &search, config.page_size);
        let session = browser_session();
        let user = if session.is_logged_in() { session.current_user() } else { None };
        Self {
            config: StoredValue::new(config),
            route: RwSignal::new(route),
            current_user: RwSignal::new(user),
            theme: RwSignal::new(Theme::load(&crate::session::BrowserStorage)),
            notice: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config())
    }

    /// Resolve a backend image URL for `<img src>`
    pub fn asset_url(&self, url: &str) -> String {
        self.config.with_value(|c| c.asset_url(url))
    }

    pub fn page_size(&self) -> u32 {
        self.config.with_value(|c| c.page_size)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.with(Option::is_some)
    }

    /// Go to a route, adding a history entry
    pub fn navigate(&self, route: Route) {
        let href = route.href();
        log::debug!("navigate to {}", href);
        router::push_history(&href);
        self.route.set(route);
        router::scroll_to_top();
    }

    /// Go to an in-app href such as `/items?category=Books`
    pub fn navigate_href(&self, href: &str) {
        let (path, search) = match href.split_once('?') {
            Some((path, search)) => (path.to_string(), format!("?{}", search)),
            None => (href.to_string(), String::new()),
        };
        self.navigate(Route::parse(&path, &search, self.page_size()));
    }

    /// Re-read login state from local storage
    pub fn refresh_session(&self) {
        let session = browser_session();
        let user = if session.is_logged_in() { session.current_user() } else { None };
        self.current_user.set(user);
    }

    pub fn logout(&self) {
        let api = self.api();
        let ctx = *self;
        leptos::task::spawn_local(async move {
            api.logout().await;
            ctx.current_user.set(None);
            ctx.navigate(Route::Home);
        });
    }

    /// Banner text for a failed call. Auth failures also drop the session
    /// and send the user to the login page.
    pub fn error_message(&self, err: &ApiError, fallback: &str) -> String {
        if err.is_auth_failure() {
            browser_session().clear();
            self.current_user.set(None);
            self.notice.set(Some(err.to_string()));
            self.navigate(Route::Login);
            return err.to_string();
        }
        match err {
            ApiError::Validation(msg) | ApiError::Forbidden(msg) | ApiError::InvalidResponse(msg) => msg.clone(),
            ApiError::Redirect => err.to_string(),
            ApiError::Status { message, .. } if !message.starts_with("HTTP ") => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        theme.save(&crate::session::BrowserStorage);
        theme.apply();
        self.theme.set(theme);
    }

    pub fn take_notice(&self) -> Option<String> {
        let notice = self.notice.get_untracked();
        if notice.is_some() {
            self.notice.set(None);
        }
        notice
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
