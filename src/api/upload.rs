//! Image Upload Endpoint
//!
//! Multipart upload of staged photos; the backend answers with their URLs.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::ApiClient;
use crate::error::Result;
use crate::session::KeyValueStore;
use crate::staging::StagedImage;

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn upload_images(&self, images: &[StagedImage]) -> Result<Vec<String>> {
        if images.is_empty() {
            return Ok(Vec::new());
        }
        let mut form = Form::new();
        for image in images {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.name.clone())
                .mime_str(&image.mime)?;
            form = form.part("files", part);
        }
        // multipart sets its own content type with the boundary
        let req = self.request(Method::POST, "/upload/images").multipart(form);
        let urls: Vec<String> = self.send_json(req).await?;
        log::info!("uploaded {} images", urls.len());
        Ok(urls)
    }
}
