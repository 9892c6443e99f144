//! Item Endpoints
//!
//! Listing, lookup and CRUD for items.

use reqwest::Method;

use super::ApiClient;
use crate::error::Result;
use crate::models::{Item, ItemRequest, Page};
use crate::query::ListingQuery;
use crate::session::KeyValueStore;

impl<S: KeyValueStore> ApiClient<S> {
    /// One page of items matching the filters
    pub async fn list_items(&self, query: &ListingQuery) -> Result<Page<Item>> {
        let req = self.request(Method::GET, "/items").query(&query.to_api_pairs());
        let page: Page<Item> = self.send_json(req).await?;
        log::debug!("loaded page {} ({} of {} items)", page.current_page, page.items.len(), page.total_items);
        Ok(page)
    }

    /// First few items whose name matches `term`
    pub async fn suggest_items(&self, term: &str, limit: u32) -> Result<Vec<Item>> {
        let req = self
            .request(Method::GET, "/items")
            .query(&[("search", term.to_string()), ("size", limit.to_string())]);
        let page: Page<Item> = self.send_json(req).await?;
        Ok(page.items)
    }

    pub async fn get_item(&self, id: u64) -> Result<Item> {
        self.send_json(self.request(Method::GET, &format!("/items/{}", id))).await
    }

    pub async fn create_item(&self, item: &ItemRequest) -> Result<Item> {
        let created: Item = self.send_json(self.request(Method::POST, "/items").json(item)).await?;
        log::info!("created item #{}", created.id);
        Ok(created)
    }

    pub async fn update_item(&self, id: u64, item: &ItemRequest) -> Result<Item> {
        let req = self.request(Method::PUT, &format!("/items/{}", id)).json(item);
        let updated: Item = self.send_json(req).await?;
        log::info!("updated item #{}", id);
        Ok(updated)
    }

    pub async fn delete_item(&self, id: u64) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/items/{}", id))).await?;
        log::info!("deleted item #{}", id);
        Ok(())
    }

    /// Items owned by the logged-in user
    pub async fn my_items(&self) -> Result<Vec<Item>> {
        self.send_json(self.request(Method::GET, "/items/my-items")).await
    }
}
