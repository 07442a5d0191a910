//! Browser storage adapters.

pub mod local_prefs;
