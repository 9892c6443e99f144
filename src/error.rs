//! Frontend Errors
//!
//! Errors surfaced by the API client and form handling. `Display` is the
//! text shown in error banners.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Http(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    #[error("{0}")]
    Forbidden(String),

    #[error("Not found")]
    NotFound,

    #[error("Server configuration error (307 redirect). Please check backend settings.")]
    Redirect,

    #[error("Failed to parse server response: {0}")]
    Decode(String),

    #[error("{0}")]
    InvalidResponse(String),

    #[error("Local storage unavailable: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Map a non-success HTTP status and its body text to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        match status {
            307 => ApiError::Redirect,
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(if body.is_empty() {
                "You don't have permission to do that".to_string()
            } else {
                body.to_string()
            }),
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                status,
                message: if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.to_string()
                },
            },
        }
    }

    /// True when the session must be dropped and the user sent to login
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "gone"), ApiError::NotFound);
        assert_eq!(ApiError::from_status(307, ""), ApiError::Redirect);
        assert_eq!(
            ApiError::from_status(403, "You don't have permission to update this item"),
            ApiError::Forbidden("You don't have permission to update this item".into())
        );
    }

    #[test]
    fn test_status_message_falls_back_to_code() {
        let err = ApiError::from_status(500, "  ");
        assert_eq!(err.to_string(), "HTTP 500");
        let err = ApiError::from_status(400, "Username is already taken!");
        assert_eq!(err.to_string(), "Username is already taken!");
    }

    #[test]
    fn test_only_unauthorized_is_auth_failure() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(!ApiError::from_status(403, "").is_auth_failure());
        assert!(!ApiError::Http("offline".into()).is_auth_failure());
    }
}
