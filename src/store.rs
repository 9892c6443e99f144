//! Listing State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity of the item grid.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, Page};

/// Item listing state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListingState {
    /// Items on the current page
    pub items: Vec<Item>,
    /// Zero-based page reported by the backend
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub loading: bool,
    /// Banner text of the last failed load
    pub error: Option<String>,
}

/// Type alias for the store
pub type ListingStore = Store<ListingState>;

pub fn new_listing_store() -> ListingStore {
    Store::new(ListingState { loading: true, ..Default::default() })
}

// ========================
// Store Helper Functions
// ========================

/// Replace the grid with a freshly loaded page
pub fn store_apply_page(store: &ListingStore, page: Page<Item>) {
    store.items().set(page.items);
    store.current_page().set(page.current_page);
    store.total_pages().set(page.total_pages);
    store.total_items().set(page.total_items);
    store.error().set(None);
    store.loading().set(false);
}

/// Keep the current items but show the failure
pub fn store_fail(store: &ListingStore, message: String) {
    store.error().set(Some(message));
    store.loading().set(false);
}

/// Remove an item from the store by ID. Returns false if nothing was removed,
/// including when the store was disposed while a delete was in flight.
pub fn store_remove_item(store: &ListingStore, item_id: u64) -> bool {
    let removed = store
        .items()
        .try_update(|items| {
            let before = items.len();
            items.retain(|item| item.id != item_id);
            items.len() < before
        })
        .unwrap_or(false);
    if removed {
        store.total_items().try_update(|total| *total = total.saturating_sub(1));
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            description: String::new(),
            category: "Other".into(),
            location: None,
            image_urls: Vec::new(),
            created_at: None,
            updated_at: None,
            user: None,
            reserved: false,
        }
    }

    fn loaded_store(owner: &Owner) -> ListingStore {
        owner.with(|| {
            let store = new_listing_store();
            store_apply_page(
                &store,
                Page { items: vec![item(1), item(2)], current_page: 0, total_items: 2, total_pages: 1 },
            );
            store
        })
    }

    #[test]
    fn test_remove_item_updates_total() {
        let owner = Owner::new();
        let store = loaded_store(&owner);
        assert!(store_remove_item(&store, 1));
        assert_eq!(store.items().with_untracked(|items| items.len()), 1);
        assert_eq!(store.total_items().get_untracked(), 1);
        assert!(!store_remove_item(&store, 42));
        assert_eq!(store.total_items().get_untracked(), 1);
    }

    #[test]
    fn test_remove_item_after_dispose_is_ignored() {
        let owner = Owner::new();
        let store = loaded_store(&owner);
        owner.cleanup();
        assert!(!store_remove_item(&store, 1));
    }
}
