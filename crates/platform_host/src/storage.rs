//! Client-local storage contracts.

pub mod prefs;
