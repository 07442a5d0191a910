//! Typed host-domain contracts and shared models used by the carnet runtime and browser adapters.
//!
//! This crate is the API-first boundary for the collaborators the runtime depends on: a
//! synchronous preference store for widget persistence, the media catalog read used by the café
//! rotator, and the content feeds read by the quote ticker and moon boards. Concrete browser
//! adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod host;
pub mod media;
pub mod storage;
pub mod time;

pub use content::{
    ContentFeedFuture, ContentFeedService, LetterItem, MemoryContentFeedService,
    NoopContentFeedService, PostcardImage, QuoteItem,
};
pub use host::{HostServices, HostStrategy};
pub use media::{
    MediaCatalogFuture, MediaCatalogService, MediaEntry, MemoryMediaCatalogService,
    NoopMediaCatalogService,
};
pub use storage::prefs::{MemoryPrefsStore, PrefsStore};
pub use time::unix_time_ms_now;
