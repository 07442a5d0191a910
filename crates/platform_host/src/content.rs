//! Read-only content feed contracts (quotes, postcard images, letters).

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ContentFeedService`] async methods.
pub type ContentFeedFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One quote shown by the ticker.
pub struct QuoteItem {
    /// Quote text.
    pub text: String,
    /// Whether the quote is published.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One uploaded postcard image, newest first in feeds.
pub struct PostcardImage {
    /// Document id.
    pub id: String,
    /// Board the image was filed under.
    #[serde(default)]
    pub board: Option<String>,
    /// Download URL.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One letter or poem fragment, newest first in feeds.
pub struct LetterItem {
    /// Document id.
    pub id: String,
    /// Letter body.
    #[serde(default)]
    pub text: String,
    /// Optional folder name.
    #[serde(default)]
    pub folder: Option<String>,
    /// Creation time in unix milliseconds, if known.
    #[serde(default, rename = "createdAtMs")]
    pub created_at_ms: Option<u64>,
}

/// Host service reading the published content lists.
pub trait ContentFeedService {
    /// Lists quotes.
    fn list_quotes<'a>(&'a self) -> ContentFeedFuture<'a, Result<Vec<QuoteItem>, String>>;

    /// Lists recent postcard images (at most `limit`).
    fn list_postcard_images<'a>(
        &'a self,
        limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<PostcardImage>, String>>;

    /// Lists recent letters (at most `limit`).
    fn list_letters<'a>(
        &'a self,
        limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<LetterItem>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op content feed; every list is empty.
pub struct NoopContentFeedService;

impl ContentFeedService for NoopContentFeedService {
    fn list_quotes<'a>(&'a self) -> ContentFeedFuture<'a, Result<Vec<QuoteItem>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn list_postcard_images<'a>(
        &'a self,
        _limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<PostcardImage>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn list_letters<'a>(
        &'a self,
        _limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<LetterItem>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory content feed used by tests and local previews.
pub struct MemoryContentFeedService {
    quotes: Rc<RefCell<Vec<QuoteItem>>>,
    postcards: Rc<RefCell<Vec<PostcardImage>>>,
    letters: Rc<RefCell<Vec<LetterItem>>>,
}

impl MemoryContentFeedService {
    /// Replaces the quote list.
    pub fn set_quotes(&self, quotes: Vec<QuoteItem>) {
        *self.quotes.borrow_mut() = quotes;
    }

    /// Replaces the postcard image list.
    pub fn set_postcard_images(&self, images: Vec<PostcardImage>) {
        *self.postcards.borrow_mut() = images;
    }

    /// Replaces the letter list.
    pub fn set_letters(&self, letters: Vec<LetterItem>) {
        *self.letters.borrow_mut() = letters;
    }
}

impl ContentFeedService for MemoryContentFeedService {
    fn list_quotes<'a>(&'a self) -> ContentFeedFuture<'a, Result<Vec<QuoteItem>, String>> {
        Box::pin(async move { Ok(self.quotes.borrow().clone()) })
    }

    fn list_postcard_images<'a>(
        &'a self,
        limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<PostcardImage>, String>> {
        Box::pin(async move { Ok(self.postcards.borrow().iter().take(limit).cloned().collect()) })
    }

    fn list_letters<'a>(
        &'a self,
        limit: usize,
    ) -> ContentFeedFuture<'a, Result<Vec<LetterItem>, String>> {
        Box::pin(async move { Ok(self.letters.borrow().iter().take(limit).cloned().collect()) })
    }
}
