use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_PAGES: [&str; 4] = ["today", "cafe", "moon", "urhu"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CafeSection {
    pomodoro_seconds: u32,
    media_folder: String,
    note_base_x: f64,
    note_base_y: f64,
    note_cascade: f64,
    pomo_dock_x: f64,
    pomo_dock_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BackendSection {
    base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteManifest {
    schema_version: u32,
    page_order: Vec<String>,
    cafe: CafeSection,
    backend: BackendSection,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("site.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: SiteManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for key in &manifest.page_order {
        if !KNOWN_PAGES.contains(&key.as_str()) {
            panic!("unknown page `{key}` in {}", path.display());
        }
        if !seen.insert(key.as_str()) {
            panic!("duplicate page `{key}` in {}", path.display());
        }
    }
    if manifest.page_order.is_empty() {
        panic!("page_order in {} must name at least one page", path.display());
    }
    if manifest.cafe.pomodoro_seconds == 0 {
        panic!("cafe.pomodoro_seconds in {} must be positive", path.display());
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize site manifest");
    let generated = format!(
        "/// Build-time generated site configuration JSON.\n\
pub const SITE_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("site_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
