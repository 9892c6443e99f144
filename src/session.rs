//! Auth Session
//!
//! Login state cached in local storage: the user record, a logged-in flag,
//! and an optional bearer token. Storage sits behind `KeyValueStore` so the
//! bookkeeping can be exercised without a browser.

use crate::error::{ApiError, Result};
use crate::models::{LoginResponse, User};

pub const USER_KEY: &str = "user";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const TOKEN_KEY: &str = "authToken";

/// String key/value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on each access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage().ok_or_else(|| ApiError::Storage("no localStorage".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Auth bookkeeping over a key/value store
#[derive(Debug, Clone, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a successful login. Fails if the response lacks id, username or email.
    pub fn store_login(&self, response: &LoginResponse) -> Result<User> {
        let user = response
            .user()
            .ok_or_else(|| ApiError::InvalidResponse("Invalid response format from server".into()))?;
        let json = serde_json::to_string(&user)?;
        self.store.set(USER_KEY, &json)?;
        self.store.set(LOGGED_IN_KEY, "true")?;
        match response.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => self.store.set(TOKEN_KEY, token)?,
            None => self.store.remove(TOKEN_KEY),
        }
        Ok(user)
    }

    pub fn clear(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(LOGGED_IN_KEY);
        self.store.remove(TOKEN_KEY);
    }

    pub fn current_user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("discarding unreadable user record: {}", e);
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true") && self.current_user().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// `Authorization` header value, when a token is cached
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }
}

/// Session over the browser's local storage
pub type BrowserSession = Session<BrowserStorage>;

pub fn browser_session() -> BrowserSession {
    Session::new(BrowserStorage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_response(token: Option<&str>) -> LoginResponse {
        LoginResponse {
            token: token.map(String::from),
            id: Some(4),
            username: Some("anna".into()),
            email: Some("anna@example.org".into()),
        }
    }

    #[test]
    fn test_login_then_logout() {
        let session = Session::new(MemoryStorage::default());
        assert!(!session.is_logged_in());

        let user = session.store_login(&login_response(Some("abc"))).unwrap();
        assert_eq!(user.username, "anna");
        assert!(session.is_logged_in());
        assert_eq!(session.current_user().map(|u| u.id), Some(4));
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc"));

        session.clear();
        assert!(!session.is_logged_in());
        assert!(session.current_user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_login_without_token_is_still_logged_in() {
        let session = Session::new(MemoryStorage::default());
        session.store_login(&login_response(None)).unwrap();
        assert!(session.is_logged_in());
        assert!(session.bearer().is_none());
    }

    #[test]
    fn test_new_login_drops_stale_token() {
        let session = Session::new(MemoryStorage::default());
        session.store_login(&login_response(Some("old"))).unwrap();
        session.store_login(&login_response(None)).unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_invalid_login_response_stores_nothing() {
        let session = Session::new(MemoryStorage::default());
        let bad = LoginResponse { token: Some("t".into()), ..LoginResponse::default() };
        let err = session.store_login(&bad).unwrap_err();
        assert_eq!(err.to_string(), "Invalid response format from server");
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_flag_without_user_is_logged_out() {
        let store = MemoryStorage::default();
        store.set(LOGGED_IN_KEY, "true").unwrap();
        let session = Session::new(store);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_corrupt_user_record_is_logged_out() {
        let store = MemoryStorage::default();
        store.set(LOGGED_IN_KEY, "true").unwrap();
        store.set(USER_KEY, "{broken").unwrap();
        let session = Session::new(store);
        assert!(session.current_user().is_none());
        assert!(!session.is_logged_in());
    }
}
