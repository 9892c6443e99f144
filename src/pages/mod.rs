//! Pages
//!
//! One component per route.

mod auth;
mod home;
mod item;
mod item_editor;
mod items;
mod my_items;
mod not_found;

pub use auth::{LoginPage, RegisterPage};
pub use home::HomePage;
pub use item::ItemPage;
pub use item_editor::{EditItemPage, NewItemPage};
pub use items::ItemsPage;
pub use my_items::MyItemsPage;
pub use not_found::NotFoundPage;
