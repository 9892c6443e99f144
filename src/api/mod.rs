//! Backend API Client
//!
//! Thin wrappers over the REST backend, organized by domain.

mod auth;
mod comments;
mod items;
mod upload;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use crate::session::{browser_session, BrowserStorage, KeyValueStore, Session};

/// Client for one backend; cheap to create per call site
#[derive(Clone)]
pub struct ApiClient<S = BrowserStorage> {
    http: reqwest::Client,
    config: AppConfig,
    session: Session<S>,
}

impl ApiClient {
    /// Client over the browser's local-storage session
    pub fn new(config: AppConfig) -> Self {
        Self::with_session(config, browser_session())
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn with_session(config: AppConfig, session: Session<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    /// Request with JSON accept header, bearer token and cookies attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.api_url(path);
        log::debug!("{} {}", method, url);
        let mut req = self.http.request(method, url).header(ACCEPT, "application/json");
        if let Some(bearer) = self.session.bearer() {
            req = req.header(AUTHORIZATION, bearer);
        }
        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }
        req
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send().await.map_err(|e| {
            log::warn!("request failed: {}", e);
            ApiError::from(e)
        })?;
        check_status(resp).await
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let resp = self.send(req).await?;
        read_json(resp).await
    }
}

/// Turn a non-success status into an `ApiError` carrying the body text
async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    log::warn!("HTTP {}: {}", status.as_u16(), body);
    Err(ApiError::from_status(status.as_u16(), &body))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        log::warn!("unexpected response body: {}", e);
        ApiError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::session::MemoryStorage;

    fn client() -> ApiClient<MemoryStorage> {
        let config = AppConfig { api_base_url: "http://localhost:8080".into(), ..AppConfig::default() };
        ApiClient::with_session(config, Session::new(MemoryStorage::default()))
    }

    #[test]
    fn test_request_without_token() {
        let req = client().request(Method::GET, "/items").build().unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8080/api/items");
        assert_eq!(req.headers()[ACCEPT], "application/json");
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_carries_cached_token() {
        let api = client();
        let login = LoginResponse {
            token: Some("abc".into()),
            id: Some(1),
            username: Some("anna".into()),
            email: Some("anna@example.org".into()),
        };
        api.session.store_login(&login).unwrap();

        let req = api.request(Method::DELETE, "/items/3").build().unwrap();
        assert_eq!(req.method(), &Method::DELETE);
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer abc");
        assert_eq!(req.headers()[ACCEPT], "application/json");
    }
}
