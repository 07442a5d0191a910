//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the preference store
//! (`localStorage`), the media catalog, and the content feeds. HTTP reads go through the small
//! fetch bridge in `bridge`, which has a non-wasm fallback so the crate compiles and tests on
//! every target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod content;
pub mod media;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, prefs_store, selected_host_strategy};
pub use content::WebContentFeedService;
pub use media::WebMediaCatalogService;
pub use storage::local_prefs::WebPrefsStore;
