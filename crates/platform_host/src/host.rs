//! Shared host-bundle model injected into the carnet runtime.

use std::rc::Rc;

use crate::{
    ContentFeedService, MediaCatalogService, MemoryContentFeedService, MemoryMediaCatalogService,
    MemoryPrefsStore, PrefsStore,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory composition used by tests and non-browser builds.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `carnet_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Client-local preference store backing every persisted widget.
    pub prefs: Rc<dyn PrefsStore>,
    /// Media catalog read used by the café rotator.
    pub media: Rc<dyn MediaCatalogService>,
    /// Content feeds read by the quote ticker and the moon page.
    pub content: Rc<dyn ContentFeedService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an all-in-memory bundle.
    pub fn memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            media: Rc::new(MemoryMediaCatalogService::default()),
            content: Rc::new(MemoryContentFeedService::default()),
            host_strategy: HostStrategy::Memory,
        }
    }
}
