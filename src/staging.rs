//! Image Staging
//!
//! Photos attached to an item form before it is saved: URLs already on the
//! backend plus newly picked files held in memory until upload.

use std::fmt;

/// A picked file waiting for upload
#[derive(Clone, PartialEq)]
pub struct StagedImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    /// Object URL for the preview `<img>`; revoke when the image is dropped
    pub preview_url: String,
}

impl fmt::Debug for StagedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedImage")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageStaging {
    existing: Vec<String>,
    staged: Vec<StagedImage>,
    max: usize,
}

impl ImageStaging {
    pub fn new(max: usize) -> Self {
        Self::with_existing(Vec::new(), max)
    }

    /// Start from an item's current photos (edit form)
    pub fn with_existing(existing: Vec<String>, max: usize) -> Self {
        Self { existing, staged: Vec::new(), max: max.max(1) }
    }

    pub fn existing(&self) -> &[String] {
        &self.existing
    }

    pub fn staged(&self) -> &[StagedImage] {
        &self.staged
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn total(&self) -> usize {
        self.existing.len() + self.staged.len()
    }

    pub fn is_full(&self) -> bool {
        self.total() >= self.max
    }

    pub fn can_accept(&self, count: usize) -> bool {
        self.total() + count <= self.max
    }

    pub fn limit_message(&self) -> String {
        format!("You can upload a maximum of {} images", self.max)
    }

    /// Add a batch. Non-images are skipped; the whole batch is refused if it
    /// would exceed the limit. Returns how many images were staged.
    pub fn stage(&mut self, images: Vec<StagedImage>) -> Result<usize, String> {
        let images: Vec<StagedImage> = images.into_iter().filter(|img| is_image_mime(&img.mime)).collect();
        if !self.can_accept(images.len()) {
            return Err(self.limit_message());
        }
        let added = images.len();
        self.staged.extend(images);
        Ok(added)
    }

    pub fn remove_existing(&mut self, index: usize) -> Option<String> {
        (index < self.existing.len()).then(|| self.existing.remove(index))
    }

    /// Drop a staged file; the caller revokes its preview URL
    pub fn remove_staged(&mut self, index: usize) -> Option<StagedImage> {
        (index < self.staged.len()).then(|| self.staged.remove(index))
    }

    /// Drop every staged file (after save), returning them for cleanup
    pub fn take_staged(&mut self) -> Vec<StagedImage> {
        std::mem::take(&mut self.staged)
    }

    /// Final URL list: kept photos first, then freshly uploaded ones
    pub fn merged_urls(&self, uploaded: Vec<String>) -> Vec<String> {
        self.existing.iter().cloned().chain(uploaded).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> StagedImage {
        StagedImage {
            name: name.to_string(),
            mime: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8],
            preview_url: format!("blob:{}", name),
        }
    }

    #[test]
    fn test_stage_within_limit() {
        let mut staging = ImageStaging::with_existing(vec!["/api/upload/images/a.jpg".into()], 5);
        assert_eq!(staging.stage(vec![image("b"), image("c")]), Ok(2));
        assert_eq!(staging.total(), 3);
        assert!(!staging.is_full());
    }

    #[test]
    fn test_batch_over_limit_is_refused_whole() {
        let mut staging = ImageStaging::with_existing(vec!["a".into(), "b".into(), "c".into()], 5);
        let err = staging.stage(vec![image("d"), image("e"), image("f")]).unwrap_err();
        assert_eq!(err, "You can upload a maximum of 5 images");
        assert_eq!(staging.total(), 3);
        assert_eq!(staging.stage(vec![image("d"), image("e")]), Ok(2));
        assert!(staging.is_full());
        assert!(!staging.can_accept(1));
    }

    #[test]
    fn test_non_images_are_skipped() {
        let mut staging = ImageStaging::new(5);
        let pdf = StagedImage { mime: "application/pdf".into(), ..image("doc") };
        assert_eq!(staging.stage(vec![pdf, image("x")]), Ok(1));
        assert_eq!(staging.staged()[0].name, "x");
    }

    #[test]
    fn test_remove_by_index() {
        let mut staging = ImageStaging::with_existing(vec!["a".into(), "b".into()], 5);
        staging.stage(vec![image("c")]).unwrap();
        assert_eq!(staging.remove_existing(0).as_deref(), Some("a"));
        assert_eq!(staging.remove_existing(5), None);
        assert_eq!(staging.remove_staged(0).map(|i| i.preview_url), Some("blob:c".to_string()));
        assert_eq!(staging.remove_staged(0), None);
        assert_eq!(staging.existing(), &["b".to_string()]);
    }

    #[test]
    fn test_merged_urls_keep_existing_first() {
        let mut staging = ImageStaging::with_existing(vec!["old".into()], 5);
        staging.stage(vec![image("n")]).unwrap();
        let taken = staging.take_staged();
        assert_eq!(taken.len(), 1);
        assert_eq!(staging.merged_urls(vec!["new".into()]), vec!["old", "new"]);
        assert_eq!(staging.total(), 1);
    }
}
