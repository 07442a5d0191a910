//! Best-effort client-local persistence for the café desk widgets.
//!
//! Every widget owns disjoint keys. Reads fall back to the caller's default and writes are
//! fire-and-forget: failures are logged and never reach the user, and in-memory state stays
//! authoritative for the session.

use std::{fmt, rc::Rc};

use platform_host::{MemoryPrefsStore, PrefsStore};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub const STICKY_NOTES_KEY: &str = "cafe-stickies-v1";
pub const POMODORO_STATE_KEY: &str = "cafe-pomo-v1";
pub const POMODORO_DOCK_KEY: &str = "cafe-pomo-pos-v1";
pub const MEDIA_BAG_KEY: &str = "cafe-video-pool-v1";
/// Stored as the bare URL string, not JSON.
pub const MEDIA_CURRENT_KEY: &str = "cafe-video-current-v1";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("read `{key}` failed: {reason}")]
    Read { key: String, reason: String },
    #[error("decode `{key}` failed: {reason}")]
    Decode { key: String, reason: String },
    #[error("encode `{key}` failed: {reason}")]
    Encode { key: String, reason: String },
    #[error("write `{key}` failed: {reason}")]
    Write { key: String, reason: String },
}

/// Advisory key/value store shared by every persisted widget.
#[derive(Clone)]
pub struct PersistentStore {
    prefs: Rc<dyn PrefsStore>,
}

impl fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore").finish_non_exhaustive()
    }
}

impl PersistentStore {
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self { prefs }
    }

    /// Store over a fresh in-memory map.
    pub fn memory() -> Self {
        Self::new(Rc::new(MemoryPrefsStore::default()))
    }

    pub fn try_get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.prefs.load_pref(key).map_err(|reason| StoreError::Read {
            key: key.to_string(),
            reason,
        })
    }

    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.try_get_raw(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StoreError::Decode {
                key: key.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn try_set_raw(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        self.prefs.save_pref(key, raw).map_err(|reason| StoreError::Write {
            key: key.to_string(),
            reason,
        })
    }

    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|err| StoreError::Encode {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
        self.try_set_raw(key, &raw)
    }

    pub fn try_remove(&self, key: &str) -> Result<(), StoreError> {
        self.prefs.delete_pref(key).map_err(|reason| StoreError::Write {
            key: key.to_string(),
            reason,
        })
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.try_get_raw(key).unwrap_or_else(|err| {
            leptos::logging::warn!("persistent store {err}");
            None
        })
    }

    /// Typed read; absent, unreadable or malformed values all yield `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.try_get(key).unwrap_or_else(|err| {
            leptos::logging::warn!("persistent store {err}");
            None
        })
    }

    pub fn set_raw(&self, key: &str, raw: &str) {
        if let Err(err) = self.try_set_raw(key, raw) {
            leptos::logging::warn!("persistent store {err}");
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            leptos::logging::warn!("persistent store {err}");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = self.try_remove(key) {
            leptos::logging::warn!("persistent store {err}");
        }
    }
}
