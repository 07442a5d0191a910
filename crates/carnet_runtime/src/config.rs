//! Site configuration embedded from `site.manifest.toml` at build time.

use serde::{Deserialize, Serialize};

use crate::model::{PageKey, Position};

include!(concat!(env!("OUT_DIR"), "/site_config_generated.rs"));

/// Default pomodoro length in seconds (25 minutes).
pub const DEFAULT_POMODORO_SECONDS: u32 = 25 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Café desk widget settings.
pub struct CafeConfig {
    /// Pomodoro length in seconds.
    pub pomodoro_seconds: u32,
    /// Media store folder listed for the background rotator.
    pub media_folder: String,
    /// X of the first sticky note.
    pub note_base_x: f64,
    /// Y of the first sticky note.
    pub note_base_y: f64,
    /// Per-note cascade step applied to both axes.
    pub note_cascade: f64,
    /// Default X of the pomodoro dock.
    pub pomo_dock_x: f64,
    /// Default Y of the pomodoro dock.
    pub pomo_dock_y: f64,
}

impl CafeConfig {
    /// Position of the first sticky note.
    pub fn note_base(&self) -> Position {
        Position::new(self.note_base_x, self.note_base_y)
    }

    /// Default pomodoro dock position.
    pub fn pomo_dock_default(&self) -> Position {
        Position::new(self.pomo_dock_x, self.pomo_dock_y)
    }
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            pomodoro_seconds: DEFAULT_POMODORO_SECONDS,
            media_folder: "cafe-wall".to_string(),
            note_base_x: 40.0,
            note_base_y: 90.0,
            note_cascade: 18.0,
            pomo_dock_x: 0.0,
            pomo_dock_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Collaborator endpoint settings.
pub struct BackendConfig {
    /// Root URL of the media catalog and content feed endpoints.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Whole-site configuration.
pub struct SiteConfig {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Initial card order, back to front.
    pub page_order: Vec<PageKey>,
    /// Café desk settings.
    pub cafe: CafeConfig,
    /// Collaborator endpoints.
    pub backend: BackendConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            page_order: PageKey::ALL.to_vec(),
            cafe: CafeConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Returns the configuration embedded at build time.
    ///
    /// The build script already rejects invalid manifests; a parse failure here falls back to
    /// [`SiteConfig::default`].
    pub fn builtin() -> Self {
        match serde_json::from_str(SITE_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("embedded site config invalid, using defaults: {err}");
                Self::default()
            }
        }
    }
}
