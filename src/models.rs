//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Fixed listing categories
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Furniture",
    "Clothing",
    "Sports",
    "Books",
    "Toys",
    "Vehicles",
    "Beauty",
    "Services",
    "Other",
];

/// Filter label meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Buttons of the listing filter: "All" followed by every category
pub const FILTER_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Electronics",
    "Furniture",
    "Clothing",
    "Sports",
    "Books",
    "Toys",
    "Vehicles",
    "Beauty",
    "Services",
    "Other",
];

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub reserved: bool,
}

impl Item {
    pub fn owned_by(&self, user: &User) -> bool {
        self.user.as_ref().map_or(false, |owner| owner.id == user.id)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Location only when it carries text
    pub fn location_label(&self) -> Option<&str> {
        self.location.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Comment data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: Option<u64>,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous")
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            total_items: 0,
            total_pages: 0,
        }
    }
}

/// Create/update body for items
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    pub reserved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response; fields are optional so a malformed payload can be reported
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// The user record, if the response carries all of id, username and email
    pub fn user(&self) -> Option<User> {
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        let email = self.email.as_deref().filter(|e| !e.is_empty())?;
        Some(User {
            id: self.id.filter(|id| *id != 0)?,
            username: username.to_string(),
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest<'a> {
    pub text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_categories_extend_categories() {
        assert_eq!(FILTER_CATEGORIES[0], ALL_CATEGORIES);
        assert_eq!(&FILTER_CATEGORIES[1..], CATEGORIES);
    }

    #[test]
    fn test_item_defaults_for_missing_fields() {
        let item: Item = serde_json::from_str(r#"{"id":7,"name":"Sofa","category":"Furniture"}"#).unwrap();
        assert_eq!(item.id, 7);
        assert!(!item.reserved);
        assert!(item.image_urls.is_empty());
        assert_eq!(item.cover_image(), None);
        assert_eq!(item.location_label(), None);
    }

    #[test]
    fn test_item_camel_case_fields() {
        let json = r#"{
            "id": 3, "name": "Lamp", "description": "Works", "category": "Other",
            "location": " Wien ", "imageUrls": ["/api/upload/images/a.jpg"],
            "createdAt": "2024-05-12T14:03:00", "reserved": true,
            "user": {"id": 9, "username": "anna", "email": "anna@example.org"}
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.cover_image(), Some("/api/upload/images/a.jpg"));
        assert_eq!(item.location_label(), Some("Wien"));
        assert!(item.reserved);
        let anna = User { id: 9, username: "anna".into(), email: String::new() };
        let bob = User { id: 10, username: "bob".into(), email: String::new() };
        assert!(item.owned_by(&anna));
        assert!(!item.owned_by(&bob));
    }

    #[test]
    fn test_item_request_skips_empty_optionals() {
        let req = ItemRequest {
            name: "Chair".into(),
            description: "Old".into(),
            category: "Furniture".into(),
            location: None,
            image_urls: None,
            reserved: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("location").is_none());
        assert!(json.get("imageUrls").is_none());
        assert_eq!(json["reserved"], false);
    }

    #[test]
    fn test_login_response_requires_identity() {
        let ok: LoginResponse =
            serde_json::from_str(r#"{"token":"t","id":1,"username":"anna","email":"a@b.at"}"#).unwrap();
        assert_eq!(ok.user().map(|u| u.username), Some("anna".to_string()));

        let missing: LoginResponse = serde_json::from_str(r#"{"token":"t","username":"anna"}"#).unwrap();
        assert!(missing.user().is_none());
    }

    #[test]
    fn test_comment_author_fallback() {
        let c: Comment = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(c.author_name(), "Anonymous");
    }

    #[test]
    fn test_page_metadata() {
        let page: Page<Item> =
            serde_json::from_str(r#"{"items":[],"currentPage":2,"totalItems":40,"totalPages":4}"#).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_items, 40);
    }
}
