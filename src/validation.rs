//! Form Validation
//!
//! Client-side checks run before any request is sent.

use crate::models::{ItemRequest, CATEGORIES};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Editable fields of the item form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub reserved: bool,
}

impl ItemDraft {
    pub fn new() -> Self {
        Self { category: CATEGORIES[0].to_string(), ..Default::default() }
    }

    pub fn from_item(item: &crate::models::Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category: if item.category.is_empty() { CATEGORIES[0].to_string() } else { item.category.clone() },
            location: item.location.clone().unwrap_or_default(),
            reserved: item.reserved,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let required = [&self.name, &self.description, &self.category];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err("Please fill in all required fields".to_string());
        }
        Ok(())
    }

    /// Request body; empty location and photo list are left out
    pub fn into_request(self, image_urls: Vec<String>) -> ItemRequest {
        let location = self.location.trim().to_string();
        ItemRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            location: (!location.is_empty()).then_some(location),
            image_urls: (!image_urls.is_empty()).then_some(image_urls),
            reserved: self.reserved,
        }
    }
}

pub fn validate_login(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Please enter both username and password".to_string());
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

pub fn validate_registration(username: &str, email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if !looks_like_email(email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Trimmed comment text, or `None` if there is nothing to send
pub fn validate_comment(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ItemDraft {
        ItemDraft {
            name: " Bookshelf ".into(),
            description: "Solid oak".into(),
            category: "Furniture".into(),
            location: "  ".into(),
            reserved: false,
        }
    }

    #[test]
    fn test_draft_requires_fields() {
        assert!(draft().validate().is_ok());
        let missing = ItemDraft { description: "   ".into(), ..draft() };
        assert_eq!(missing.validate().unwrap_err(), "Please fill in all required fields");
    }

    #[test]
    fn test_new_draft_defaults_to_first_category() {
        assert_eq!(ItemDraft::new().category, "Electronics");
    }

    #[test]
    fn test_into_request_drops_empty_optionals() {
        let req = draft().into_request(Vec::new());
        assert_eq!(req.name, "Bookshelf");
        assert_eq!(req.location, None);
        assert_eq!(req.image_urls, None);

        let with = ItemDraft { location: "Graz".into(), ..draft() }.into_request(vec!["/a.jpg".into()]);
        assert_eq!(with.location.as_deref(), Some("Graz"));
        assert_eq!(with.image_urls, Some(vec!["/a.jpg".to_string()]));
    }

    #[test]
    fn test_login_validation() {
        assert!(validate_login("anna", "pw").is_ok());
        assert_eq!(validate_login(" ", "pw").unwrap_err(), "Please enter both username and password");
        assert!(validate_login("anna", "").is_err());
    }

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration("anna", "anna@example.org", "secret1", "secret1").is_ok());
        assert_eq!(
            validate_registration("", "a@b.at", "secret1", "secret1").unwrap_err(),
            "Please fill in all fields"
        );
        assert!(validate_registration("anna", "anna.example.org", "secret1", "secret1").is_err());
        assert!(validate_registration("anna", "anna@localhost", "secret1", "secret1").is_err());
        assert!(validate_registration("anna", "anna@x.", "secret1", "secret1").is_err());
        assert_eq!(
            validate_registration("anna", "a@b.at", "abc", "abc").unwrap_err(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            validate_registration("anna", "a@b.at", "secret1", "secret2").unwrap_err(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_comment_validation() {
        assert_eq!(validate_comment("  nice!  ").as_deref(), Some("nice!"));
        assert_eq!(validate_comment("   "), None);
    }
}
