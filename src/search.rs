//! Search Suggestions
//!
//! Gate and bookkeeping for the navbar autocomplete.

use std::sync::atomic::{AtomicU64, Ordering};

/// Whether the typed text is long enough to look up suggestions
pub fn should_suggest(input: &str, min_chars: usize) -> bool {
    input.trim().chars().count() >= min_chars
}

/// Generation counter: every keystroke starts a new generation, and only a
/// lookup from the latest generation may publish its results.
#[derive(Debug, Default)]
pub struct SuggestionGate {
    generation: AtomicU64,
}

impl SuggestionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new lookup, invalidating all earlier ones
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Invalidate in-flight lookups without starting a new one
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

/// Keyboard movement inside the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Down,
    Up,
    Enter,
    Escape,
}

impl SuggestionKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(SuggestionKey::Down),
            "ArrowUp" => Some(SuggestionKey::Up),
            "Enter" => Some(SuggestionKey::Enter),
            "Escape" => Some(SuggestionKey::Escape),
            _ => None,
        }
    }
}

/// Move the highlighted suggestion; `None` means nothing highlighted
pub fn move_selection(selected: Option<usize>, key: SuggestionKey, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        SuggestionKey::Down => Some(selected.map_or(0, |i| (i + 1).min(len - 1))),
        SuggestionKey::Up => match selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        },
        SuggestionKey::Enter => selected.filter(|i| *i < len),
        SuggestionKey::Escape => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_gate() {
        assert!(!should_suggest("", 3));
        assert!(!should_suggest("ab", 3));
        assert!(!should_suggest("  ab  ", 3));
        assert!(should_suggest("abc", 3));
        assert!(should_suggest("Kü€", 3));
    }

    #[test]
    fn test_only_latest_lookup_is_current() {
        let gate = SuggestionGate::new();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
        gate.cancel();
        assert!(!gate.is_current(second));
    }

    #[test]
    fn test_keyboard_selection() {
        assert_eq!(move_selection(None, SuggestionKey::Down, 3), Some(0));
        assert_eq!(move_selection(Some(0), SuggestionKey::Down, 3), Some(1));
        assert_eq!(move_selection(Some(2), SuggestionKey::Down, 3), Some(2));
        assert_eq!(move_selection(Some(1), SuggestionKey::Up, 3), Some(0));
        assert_eq!(move_selection(Some(0), SuggestionKey::Up, 3), None);
        assert_eq!(move_selection(Some(1), SuggestionKey::Enter, 3), Some(1));
        assert_eq!(move_selection(Some(1), SuggestionKey::Escape, 3), None);
        assert_eq!(move_selection(Some(1), SuggestionKey::Down, 0), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(SuggestionKey::from_key("ArrowDown"), Some(SuggestionKey::Down));
        assert_eq!(SuggestionKey::from_key("Tab"), None);
    }
}
