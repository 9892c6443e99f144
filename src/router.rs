//! Client-side Routes
//!
//! Maps browser locations to views and back, plus the login guard.

use crate::query::ListingQuery;

/// One page of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Items(ListingQuery),
    NewItem,
    ItemDetail(u64),
    EditItem(u64),
    MyItems,
    NotFound,
}

impl Route {
    /// Parse a pathname and query string
    pub fn parse(path: &str, search: &str, page_size: u32) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["items"] => Route::Items(ListingQuery::from_search(search, page_size)),
            ["items", "new"] => Route::NewItem,
            ["items", "my-items"] => Route::MyItems,
            ["items", id] => id.parse().map_or(Route::NotFound, Route::ItemDetail),
            ["items", id, "edit"] => id.parse().map_or(Route::NotFound, Route::EditItem),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Items(query) => format!("/items{}", query.to_search()),
            Route::NewItem => "/items/new".to_string(),
            Route::ItemDetail(id) => format!("/items/{}", id),
            Route::EditItem(id) => format!("/items/{}/edit", id),
            Route::MyItems => "/items/my-items".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Login/register pages are only for visitors
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Home | Route::Login | Route::Register | Route::NotFound)
    }

    /// Where to send the user instead of this route, if anywhere
    pub fn guard(&self, logged_in: bool) -> Option<Route> {
        if logged_in && self.is_public() {
            Some(Route::Home)
        } else if !logged_in && self.requires_auth() {
            Some(Route::Login)
        } else {
            None
        }
    }

    /// Navbar link highlighting: `/` only matches home, `/items` only the
    /// listing, other links match by prefix
    pub fn is_active(&self, link: &str) -> bool {
        match link {
            "/" => *self == Route::Home,
            "/items" => matches!(self, Route::Items(_)),
            _ => {
                let href = self.href();
                href.split('?').next().unwrap_or("/").starts_with(link)
            }
        }
    }
}

/// Pathname and search of the current browser location
pub fn current_location() -> (String, String) {
    web_sys::window()
        .map(|w| w.location())
        .map(|loc| {
            (
                loc.pathname().unwrap_or_else(|_| "/".to_string()),
                loc.search().unwrap_or_default(),
            )
        })
        .unwrap_or_else(|| ("/".to_string(), String::new()))
}

/// Push an entry onto the browser history without reloading
pub fn push_history(href: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href)) {
            log::warn!("pushState failed for {}: {:?}", href, e);
        }
    }
}

/// Replace the current history entry (used for guard redirects)
pub fn replace_history(href: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href)) {
            log::warn!("replaceState failed for {}: {:?}", href, e);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/", "", 12), Route::Home);
        assert_eq!(Route::parse("", "", 12), Route::Home);
        assert_eq!(Route::parse("/login", "", 12), Route::Login);
        assert_eq!(Route::parse("/register/", "", 12), Route::Register);
        assert_eq!(Route::parse("/items/new", "", 12), Route::NewItem);
        assert_eq!(Route::parse("/items/my-items", "", 12), Route::MyItems);
    }

    #[test]
    fn test_parse_item_routes() {
        assert_eq!(Route::parse("/items/42", "", 12), Route::ItemDetail(42));
        assert_eq!(Route::parse("/items/42/edit", "", 12), Route::EditItem(42));
        assert_eq!(Route::parse("/items/abc", "", 12), Route::NotFound);
        assert_eq!(Route::parse("/items/1/2/3", "", 12), Route::NotFound);
        assert_eq!(Route::parse("/nowhere", "", 12), Route::NotFound);
    }

    #[test]
    fn test_parse_listing_query() {
        match Route::parse("/items", "?category=Books&search=atlas", 12) {
            Route::Items(q) => {
                assert_eq!(q.category.as_deref(), Some("Books"));
                assert_eq!(q.search.as_deref(), Some("atlas"));
            }
            other => panic!("unexpected route {:?}", other),
        }
    }

    #[test]
    fn test_href_round_trip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Items(ListingQuery::new(12).with_category("Toys")),
            Route::NewItem,
            Route::ItemDetail(7),
            Route::EditItem(7),
            Route::MyItems,
        ];
        for route in routes {
            let href = route.href();
            let (path, search) = match href.split_once('?') {
                Some((p, s)) => (p.to_string(), format!("?{}", s)),
                None => (href.clone(), String::new()),
            };
            assert_eq!(Route::parse(&path, &search, 12), route, "href {}", href);
        }
    }

    #[test]
    fn test_guard_logged_out() {
        assert_eq!(Route::Home.guard(false), None);
        assert_eq!(Route::Login.guard(false), None);
        assert_eq!(Route::Register.guard(false), None);
        assert_eq!(Route::MyItems.guard(false), Some(Route::Login));
        assert_eq!(Route::ItemDetail(1).guard(false), Some(Route::Login));
        assert_eq!(Route::Items(ListingQuery::default()).guard(false), Some(Route::Login));
        assert_eq!(Route::NotFound.guard(false), None);
    }

    #[test]
    fn test_guard_logged_in() {
        assert_eq!(Route::Login.guard(true), Some(Route::Home));
        assert_eq!(Route::Register.guard(true), Some(Route::Home));
        assert_eq!(Route::NewItem.guard(true), None);
        assert_eq!(Route::Home.guard(true), None);
    }

    #[test]
    fn test_active_link() {
        let route = Route::Items(ListingQuery::new(12).with_category("Books"));
        assert!(route.is_active("/items"));
        assert!(!route.is_active("/"));
        assert!(Route::Home.is_active("/"));
        assert!(Route::MyItems.is_active("/items/my-items"));
    }

    #[test]
    fn test_items_link_only_active_on_listing() {
        assert!(!Route::MyItems.is_active("/items"));
        assert!(!Route::NewItem.is_active("/items"));
        assert!(!Route::ItemDetail(5).is_active("/items"));
        assert!(Route::parse("/items", "?page=3", 12).is_active("/items"));
    }
}
