//! Frontend Configuration
//!
//! Backend location and UI limits. Defaults can be overridden by a JSON
//! block in the host page:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "apiBaseUrl": "https://give.example.org", "pageSize": 24 }
//! </script>
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Element id of the optional JSON override block
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Compile-time backend URL, e.g. `GIVEAWAY_API_URL=https://... trunk build`
const DEFAULT_API_BASE_URL: &str = match option_env!("GIVEAWAY_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid app config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Origin of the backend, without the `/api` prefix
    pub api_base_url: String,
    /// Items per listing page
    pub page_size: u32,
    /// Suggestions shown under the navbar search
    pub suggestion_limit: u32,
    /// Minimum typed characters before suggestions are fetched
    pub suggestion_min_chars: usize,
    /// Quiet period after typing before a suggestion lookup
    pub suggestion_debounce_ms: u32,
    /// Maximum photos per item
    pub max_images: usize,
    /// Show the recent-log panel in the footer
    pub show_log: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 12,
            suggestion_limit: 5,
            suggestion_min_chars: 3,
            suggestion_debounce_ms: 250,
            max_images: 5,
            show_log: false,
        }
    }
}

impl AppConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        Ok(config.normalized())
    }

    /// Load from the host page, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|t| !t.trim().is_empty());

        match text {
            Some(text) => match Self::from_json(&text) {
                Ok(config) => {
                    log::debug!("config override read from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed
        };
        self.page_size = self.page_size.max(1);
        self.suggestion_limit = self.suggestion_limit.max(1);
        self.max_images = self.max_images.max(1);
        self
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Full URL of a backend endpoint: `api_url("/items")` -> `<base>/api/items`
    pub fn api_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}", self.base(), path)
    }

    /// Resolve an image URL returned by the backend for use in `<img src>`
    pub fn asset_url(&self, url: &str) -> String {
        let is_absolute = ["http://", "https://", "blob:", "data:"]
            .iter()
            .any(|scheme| url.starts_with(scheme));
        if is_absolute {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base(), url)
        } else {
            format!("{}/{}", self.base(), url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.suggestion_min_chars, 3);
        assert_eq!(config.max_images, 5);
        assert!(!config.show_log);
    }

    #[test]
    fn test_show_log_flag() {
        let config = AppConfig::from_json(r#"{"showLog":true}"#).unwrap();
        assert!(config.show_log);
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = AppConfig::from_json(r#"{"apiBaseUrl":"https://give.example.org/","pageSize":24}"#).unwrap();
        assert_eq!(config.api_base_url, "https://give.example.org");
        assert_eq!(config.page_size, 24);
        assert_eq!(config.max_images, 5);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(AppConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_zero_limits_are_clamped() {
        let config = AppConfig::from_json(r#"{"pageSize":0,"maxImages":0,"apiBaseUrl":"  "}"#).unwrap();
        assert_eq!(config.page_size, 1);
        assert_eq!(config.max_images, 1);
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_api_url_joins_once() {
        let config = AppConfig { api_base_url: "http://localhost:8080/".into(), ..AppConfig::default() };
        assert_eq!(config.api_url("/items"), "http://localhost:8080/api/items");
        assert_eq!(config.api_url("auth/login"), "http://localhost:8080/api/auth/login");
    }

    #[test]
    fn test_asset_url_resolution() {
        let config = AppConfig { api_base_url: "http://localhost:8080".into(), ..AppConfig::default() };
        assert_eq!(
            config.asset_url("/api/upload/images/a.jpg"),
            "http://localhost:8080/api/upload/images/a.jpg"
        );
        assert_eq!(config.asset_url("https://cdn.example.org/x.png"), "https://cdn.example.org/x.png");
        assert_eq!(config.asset_url("blob:http://localhost/abc"), "blob:http://localhost/abc");
    }
}
