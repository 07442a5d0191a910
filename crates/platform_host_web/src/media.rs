//! Media catalog adapter backed by a published JSON folder listing.

use platform_host::{MediaCatalogFuture, MediaCatalogService, MediaEntry};

use crate::bridge::{endpoint_url, fetch_json};

#[derive(Debug, Clone)]
/// Browser media catalog reading `{base_url}/media/{folder}.json` (an array of `{id, url}`).
pub struct WebMediaCatalogService {
    base_url: String,
}

impl WebMediaCatalogService {
    /// Creates an adapter rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Returns the listing URL for `folder`.
    pub fn folder_url(&self, folder: &str) -> String {
        endpoint_url(&self.base_url, &format!("media/{folder}.json"))
    }
}

impl MediaCatalogService for WebMediaCatalogService {
    fn list_media<'a>(
        &'a self,
        folder: &'a str,
    ) -> MediaCatalogFuture<'a, Result<Vec<MediaEntry>, String>> {
        Box::pin(async move { fetch_json::<Vec<MediaEntry>>(&self.folder_url(folder)).await })
    }
}
