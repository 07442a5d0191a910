//! Media catalog service contracts.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`MediaCatalogService`] async methods.
pub type MediaCatalogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One media object in a catalog folder.
pub struct MediaEntry {
    /// Stable identifier (the object's full path in the media store).
    pub id: String,
    /// Resolvable download URL.
    pub url: String,
}

impl MediaEntry {
    /// Builds an entry from an id and URL.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Host service listing the media objects stored under a named folder.
pub trait MediaCatalogService {
    /// Lists every entry in `folder`, in the order the store returns them.
    fn list_media<'a>(
        &'a self,
        folder: &'a str,
    ) -> MediaCatalogFuture<'a, Result<Vec<MediaEntry>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op catalog for unsupported targets; every folder is empty.
pub struct NoopMediaCatalogService;

impl MediaCatalogService for NoopMediaCatalogService {
    fn list_media<'a>(
        &'a self,
        _folder: &'a str,
    ) -> MediaCatalogFuture<'a, Result<Vec<MediaEntry>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory catalog keyed by folder, used by tests and local previews.
pub struct MemoryMediaCatalogService {
    folders: Rc<RefCell<HashMap<String, Vec<MediaEntry>>>>,
    failure: Rc<RefCell<Option<String>>>,
}

impl MemoryMediaCatalogService {
    /// Replaces the contents of `folder`.
    pub fn set_folder(&self, folder: &str, entries: Vec<MediaEntry>) {
        self.folders
            .borrow_mut()
            .insert(folder.to_string(), entries);
    }

    /// Makes every subsequent listing fail with `message` (pass `None` to recover).
    pub fn set_failure(&self, message: Option<&str>) {
        *self.failure.borrow_mut() = message.map(str::to_string);
    }
}

impl MediaCatalogService for MemoryMediaCatalogService {
    fn list_media<'a>(
        &'a self,
        folder: &'a str,
    ) -> MediaCatalogFuture<'a, Result<Vec<MediaEntry>, String>> {
        Box::pin(async move {
            if let Some(message) = self.failure.borrow().clone() {
                return Err(message);
            }
            Ok(self
                .folders
                .borrow()
                .get(folder)
                .cloned()
                .unwrap_or_default())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_catalog_lists_by_folder() {
        let catalog = MemoryMediaCatalogService::default();
        catalog.set_folder(
            "cafe-wall",
            vec![MediaEntry::new("cafe-wall/a.mp4", "https://cdn/a.mp4")],
        );
        let service: &dyn MediaCatalogService = &catalog;

        assert_eq!(
            block_on(service.list_media("cafe-wall")).expect("list"),
            vec![MediaEntry::new("cafe-wall/a.mp4", "https://cdn/a.mp4")]
        );
        assert!(block_on(service.list_media("other")).expect("list").is_empty());
    }

    #[test]
    fn memory_catalog_failure_is_reported() {
        let catalog = MemoryMediaCatalogService::default();
        catalog.set_failure(Some("offline"));
        assert_eq!(
            block_on(catalog.list_media("cafe-wall")),
            Err("offline".to_string())
        );
    }

    #[test]
    fn noop_catalog_is_empty() {
        assert!(block_on(NoopMediaCatalogService.list_media("cafe-wall"))
            .expect("list")
            .is_empty());
    }
}
