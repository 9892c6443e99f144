//! Auth Endpoints
//!
//! Login, registration and logout; login state is mirrored into the session.

use reqwest::Method;

use super::{check_status, ApiClient};
use crate::error::{ApiError, Result};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, User};
use crate::session::KeyValueStore;

impl<S: KeyValueStore> ApiClient<S> {
    /// Log in and cache the user and token
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let req = self
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest { username, password });
        let resp = self.send(req).await?;
        let text = resp.text().await?;
        let response: LoginResponse = serde_json::from_str(&text)
            .map_err(|_| ApiError::InvalidResponse("Failed to parse server response".into()))?;
        let user = self.session.store_login(&response)?;
        log::info!("logged in as {}", user.username);
        Ok(user)
    }

    /// Create an account; returns the server's confirmation text
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<String> {
        let req = self
            .request(Method::POST, "/auth/register")
            .json(&RegisterRequest { username, email, password });
        let resp = self.send(req).await?;
        let text = resp.text().await?;
        Ok(registration_message(&text))
    }

    /// Tell the backend, then forget the session whatever it answered
    pub async fn logout(&self) {
        let req = self.request(Method::POST, "/auth/logout");
        match req.send().await {
            Ok(resp) => {
                if let Err(e) = check_status(resp).await {
                    log::warn!("logout rejected: {}", e);
                }
            }
            Err(e) => log::warn!("logout request failed: {}", e),
        }
        self.session.clear();
        log::info!("logged out");
    }
}

/// Registration answers with a plain string, a JSON string, or `{"message": ...}`
fn registration_message(body: &str) -> String {
    let body = body.trim();
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = match parsed {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or_default()
            .to_string(),
        _ => body.to_string(),
    };
    if message.trim().is_empty() {
        "Registration successful".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_message_shapes() {
        assert_eq!(registration_message("User registered successfully!"), "User registered successfully!");
        assert_eq!(registration_message(r#""Welcome""#), "Welcome");
        assert_eq!(registration_message(r#"{"message":"User registered"}"#), "User registered");
        assert_eq!(registration_message(""), "Registration successful");
        assert_eq!(registration_message(r#"{"id":1}"#), "Registration successful");
    }
}
