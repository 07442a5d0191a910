//! Content feed adapter backed by published JSON documents.

use platform_host::{ContentFeedFuture, ContentFeedService, LetterItem, PostcardImage, QuoteItem};

use crate::bridge::{endpoint_url, fetch_json};

#[derive(Debug, Clone)]
/// Browser content feed reading `{base_url}/content/{quotes,postcards,letters}.json`.
pub struct WebContentFeedService {
    base_url: String,
}

impl WebContentFeedService {
    /// Creates an adapter rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, document: &str) -> String {
        endpoint_url(&self.base_url, &format!("content/{document}.json"))
    }
}

impl ContentFeedService for WebContentFeedService {
    fn list_quotes<'a>(&'a self) -> ContentFeedFuture<'a, Result<Vec<QuoteItem>, String>> {
        Box::pin(async move { fetch_json(&self.url("quotes")).await })
    }

    fn list_postcard_images<'a>(
        &'a self,
        limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<PostcardImage>, String>> {
        Box::pin(async move {
            let mut images: Vec<PostcardImage> = fetch_json(&self.url("postcards")).await?;
            images.truncate(limit);
            Ok(images)
        })
    }

    fn list_letters<'a>(
        &'a self,
        limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<LetterItem>, String>> {
        Box::pin(async move {
            let mut letters: Vec<LetterItem> = fetch_json(&self.url("letters")).await?;
            letters.truncate(limit);
            Ok(letters)
        })
    }
}
