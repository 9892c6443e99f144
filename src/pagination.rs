//! Pagination Helpers
//!
//! Which page buttons to show for a zero-based current page.

/// Page indices (zero-based) to render as buttons.
///
/// All pages when they fit in `width`, otherwise a window of `width` pages
/// around `current`, shifted to stay inside `0..total`.
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let width = width.max(1);
    if total <= width {
        return (0..total).collect();
    }
    let current = current.min(total - 1);
    let half = width / 2;
    let start = current.saturating_sub(half).min(total - width);
    (start..start + width).collect()
}

pub fn has_prev(current: u32) -> bool {
    current > 0
}

pub fn has_next(current: u32, total: u32) -> bool {
    current + 1 < total
}

/// Requested page lies beyond the last page of a non-empty listing
pub fn is_past_end(page: u32, total_pages: u32) -> bool {
    total_pages > 0 && page >= total_pages
}

/// "Showing 12 of 40 items" / "No items found"
pub fn results_summary(shown: usize, total: u64) -> String {
    if total == 0 {
        "No items found".to_string()
    } else {
        format!("Showing {} of {} items", shown, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_end_detection() {
        assert!(is_past_end(98, 4));
        assert!(is_past_end(4, 4));
        assert!(!is_past_end(3, 4));
        assert!(!is_past_end(0, 0));
        assert!(!is_past_end(5, 0));
    }

    #[test]
    fn test_window_shows_all_when_small() {
        assert_eq!(page_window(0, 3, 7), vec![0, 1, 2]);
        assert!(page_window(0, 0, 7).is_empty());
    }

    #[test]
    fn test_window_centers_and_clamps() {
        assert_eq!(page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(0, 20, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(19, 20, 5), vec![15, 16, 17, 18, 19]);
        // out-of-range current is clamped to the last page
        assert_eq!(page_window(99, 20, 5), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_prev_next() {
        assert!(!has_prev(0));
        assert!(has_prev(1));
        assert!(has_next(0, 2));
        assert!(!has_next(1, 2));
        assert!(!has_next(0, 0));
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(0, 0), "No items found");
        assert_eq!(results_summary(12, 40), "Showing 12 of 40 items");
    }
}
