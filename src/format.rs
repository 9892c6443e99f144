//! Display Formatting
//!
//! Dates in Austrian German style, avatars and short text helpers.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::query::encode_component;

const MONTHS_SHORT: [&str; 12] = [
    "Jän.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.", "Dez.",
];

const MONTHS_LONG: [&str; 12] = [
    "Jänner", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober", "November",
    "Dezember",
];

/// Parse a backend timestamp: local date-time with optional fraction,
/// RFC 3339 with zone, or a bare date
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn with_month(raw: Option<&str>, months: &[&str; 12]) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| format!("{}. {} {}", dt.day(), months[dt.month0() as usize], dt.year()))
        .unwrap_or_default()
}

/// "12. Mai 2024"; empty when missing or unreadable
pub fn format_date(raw: Option<&str>) -> String {
    with_month(raw, &MONTHS_SHORT)
}

/// "12. Jänner 2024"
pub fn format_date_long(raw: Option<&str>) -> String {
    with_month(raw, &MONTHS_LONG)
}

/// "12.05.2024, 14:03"
pub fn format_date_time(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%d.%m.%Y, %H:%M").to_string())
        .unwrap_or_default()
}

/// Generated initials avatar for a username
pub fn avatar_url(username: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/initials/svg?seed={}&backgroundType=gradientLinear&fontSize=38",
        encode_component(username)
    )
}

/// Upper-cased first letter, "U" when there is no name
pub fn initial(username: Option<&str>) -> String {
    username
        .and_then(|name| name.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

/// Shorten on a character boundary, appending an ellipsis
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert!(parse_timestamp("2024-05-12T14:03:00").is_some());
        assert!(parse_timestamp("2024-05-12T14:03:00.123456").is_some());
        assert!(parse_timestamp("2024-05-12T14:03:00Z").is_some());
        assert!(parse_timestamp("2024-05-12T14:03:00+02:00").is_some());
        assert!(parse_timestamp("2024-05-12").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_format_date_de_at() {
        assert_eq!(format_date(Some("2024-05-12T14:03:00")), "12. Mai 2024");
        assert_eq!(format_date(Some("2024-01-03T08:00:00.5")), "3. Jän. 2024");
        assert_eq!(format_date_long(Some("2024-01-03T08:00:00")), "3. Jänner 2024");
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("garbage")), "");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time(Some("2024-05-12T14:03:59")), "12.05.2024, 14:03");
    }

    #[test]
    fn test_avatar_and_initial() {
        assert_eq!(
            avatar_url("Anna M"),
            "https://api.dicebear.com/7.x/initials/svg?seed=Anna%20M&backgroundType=gradientLinear&fontSize=38"
        );
        assert_eq!(initial(Some("anna")), "A");
        assert_eq!(initial(Some("")), "U");
        assert_eq!(initial(None), "U");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Schöne Grüße aus Wien", 12), "Schöne Grüße…");
    }
}
