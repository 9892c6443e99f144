//! Listing Query
//!
//! Filter/sort/page state of the item listing, kept in sync with the URL
//! query string (`/items?category=Books&search=lamp&sort=oldest&page=2`)
//! and rendered into backend query parameters.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::ALL_CATEGORIES;

/// Characters escaped like JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Decode a query component; `+` counts as a space
pub fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Split `?a=1&b=2` (leading `?` optional) into decoded pairs
pub fn parse_search(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(part), String::new()),
        })
        .collect()
}

/// Render pairs as `?a=1&b=2`, or an empty string for no pairs
pub fn render_search(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    /// Backend `sortBy` field
    pub fn sort_by(self) -> &'static str {
        "createdAt"
    }

    /// Backend `sortDir`
    pub fn sort_dir(self) -> &'static str {
        match self {
            SortOrder::Newest => "desc",
            SortOrder::Oldest => "asc",
        }
    }

    /// Value used in the sort `<select>` and the URL
    pub fn value(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(12)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn category_filter(value: &str) -> Option<String> {
    non_blank(value).filter(|c| c != ALL_CATEGORIES)
}

impl ListingQuery {
    pub fn new(size: u32) -> Self {
        Self {
            page: 0,
            size: size.max(1),
            category: None,
            search: None,
            sort: SortOrder::Newest,
        }
    }

    /// Read filter state from a URL query string. The URL page is 1-based.
    pub fn from_search(search: &str, size: u32) -> Self {
        let mut query = Self::new(size);
        for (key, value) in parse_search(search) {
            match key.as_str() {
                "category" => query.category = category_filter(&value),
                "search" => query.search = non_blank(&value),
                "sort" => query.sort = SortOrder::from_value(&value).unwrap_or_default(),
                "page" => {
                    query.page = value.trim().parse::<u32>().ok().filter(|p| *p > 0).map_or(0, |p| p - 1)
                }
                _ => {}
            }
        }
        query
    }

    /// URL query string for this state; defaults are omitted
    pub fn to_search(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if self.sort != SortOrder::Newest {
            pairs.push(("sort", self.sort.value().to_string()));
        }
        if self.page > 0 {
            pairs.push(("page", (self.page + 1).to_string()));
        }
        render_search(&pairs)
    }

    /// Backend query parameters for `GET /items`
    pub fn to_api_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort.sort_by().to_string()),
            ("sortDir", self.sort.sort_dir().to_string()),
        ];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }

    /// Label of the active category button
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    pub fn with_category(&self, category: &str) -> Self {
        Self { category: category_filter(category), page: 0, ..self.clone() }
    }

    pub fn with_search(&self, search: &str) -> Self {
        Self { search: non_blank(search), page: 0, ..self.clone() }
    }

    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Self { sort, page: 0, ..self.clone() }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self { page, ..self.clone() }
    }

    /// Same filters, ignoring page and page size
    pub fn same_filters(&self, other: &Self) -> bool {
        self.category == other.category && self.search == other.search && self.sort == other.sort
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_like_uri_component() {
        assert_eq!(encode_component("Tisch & Stuhl"), "Tisch%20%26%20Stuhl");
        assert_eq!(encode_component("a-b_c.d~"), "a-b_c.d~");
        assert_eq!(encode_component("Küche"), "K%C3%BCche");
    }

    #[test]
    fn test_parse_search_decodes() {
        let pairs = parse_search("?search=red+lamp&category=Books&flag");
        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "red lamp".to_string()),
                ("category".to_string(), "Books".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_from_search_reads_filters() {
        let q = ListingQuery::from_search("?category=Books&search=K%C3%BCche&sort=oldest&page=3", 12);
        assert_eq!(q.category.as_deref(), Some("Books"));
        assert_eq!(q.search.as_deref(), Some("Küche"));
        assert_eq!(q.sort, SortOrder::Oldest);
        assert_eq!(q.page, 2);
        assert_eq!(q.size, 12);
    }

    #[test]
    fn test_all_and_blank_mean_no_filter() {
        let q = ListingQuery::from_search("?category=All&search=%20%20&page=0&sort=cheapest", 12);
        assert_eq!(q.category, None);
        assert_eq!(q.search, None);
        assert_eq!(q.page, 0);
        assert_eq!(q.sort, SortOrder::Newest);
        assert_eq!(q.category_label(), "All");
    }

    #[test]
    fn test_to_search_omits_defaults() {
        assert_eq!(ListingQuery::new(12).to_search(), "");
        let q = ListingQuery::new(12).with_category("Toys").with_search("lego").with_page(1);
        assert_eq!(q.to_search(), "?category=Toys&search=lego&page=2");
    }

    #[test]
    fn test_url_round_trip() {
        let q = ListingQuery::new(12).with_search("Tisch & Stuhl").with_sort(SortOrder::Oldest).with_page(4);
        assert_eq!(ListingQuery::from_search(&q.to_search(), 12), q);
    }

    #[test]
    fn test_api_pairs_order_and_optionals() {
        let q = ListingQuery::new(12);
        assert_eq!(
            q.to_api_pairs(),
            vec![
                ("page", "0".to_string()),
                ("size", "12".to_string()),
                ("sortBy", "createdAt".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
        let q = q.with_category("Books").with_search("atlas").with_sort(SortOrder::Oldest);
        let pairs = q.to_api_pairs();
        assert_eq!(pairs[3], ("sortDir", "asc".to_string()));
        assert_eq!(pairs[4], ("category", "Books".to_string()));
        assert_eq!(pairs[5], ("search", "atlas".to_string()));
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let q = ListingQuery::new(12).with_page(5);
        assert_eq!(q.with_category("Books").page, 0);
        assert_eq!(q.with_search("x").page, 0);
        assert_eq!(q.with_sort(SortOrder::Oldest).page, 0);
        assert_eq!(q.with_page(2).page, 2);
        assert!(q.same_filters(&q.with_page(0)));
        assert!(!q.same_filters(&q.with_category("Books")));
    }
}
