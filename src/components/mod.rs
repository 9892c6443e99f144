//! UI Components
//!
//! Reusable Leptos components.

mod category_selector;
mod comment_section;
mod delete_confirm_button;
mod image_drop_zone;
mod image_gallery;
mod item_card;
mod item_detail;
mod item_form;
mod item_list;
mod layout;
mod link;
mod log_panel;
mod login_form;
mod navbar;
mod pagination_bar;
mod register_form;
mod search_autocomplete;
mod status;
mod theme_toggle;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_card::ItemCard;
pub use item_detail::ItemDetail;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use layout::Layout;
pub use link::Link;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use status::{ErrorBanner, LoadingSpinner};
