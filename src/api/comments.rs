//! Comment Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::Result;
use crate::models::{Comment, CommentRequest};
use crate::session::KeyValueStore;

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn list_comments(&self, item_id: u64) -> Result<Vec<Comment>> {
        self.send_json(self.request(Method::GET, &format!("/items/{}/comments", item_id)))
            .await
    }

    pub async fn add_comment(&self, item_id: u64, text: &str) -> Result<Comment> {
        let req = self
            .request(Method::POST, &format!("/items/{}/comments", item_id))
            .json(&CommentRequest { text });
        self.send_json(req).await
    }
}
