//! Color Theme
//!
//! Light/dark preference stored in local storage and applied as a
//! `data-theme` attribute on `<html>` and `<body>`.

use crate::session::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "laptheme",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn load(store: &impl KeyValueStore) -> Self {
        store.get(THEME_KEY).map(|v| Theme::parse(&v)).unwrap_or_default()
    }

    pub fn save(self, store: &impl KeyValueStore) {
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            log::warn!("could not persist theme: {}", e);
        }
    }

    /// Set `data-theme` on the document
    pub fn apply(self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", self.as_str());
        }
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", self.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    #[test]
    fn test_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("laptheme"), Theme::Light);
        assert_eq!(Theme::parse("neon"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "laptheme");
    }

    #[test]
    fn test_persisted_preference() {
        let store = MemoryStorage::default();
        assert_eq!(Theme::load(&store), Theme::Light);
        Theme::Dark.save(&store);
        assert_eq!(Theme::load(&store), Theme::Dark);
    }
}
