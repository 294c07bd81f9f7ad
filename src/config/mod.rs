//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load settings from an explicit file, or search the default locations.
///
/// Environment overrides are applied last in every case.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => match find_settings_file() {
            Some(path) => {
                info!("Loading settings from: {}", path.display());
                Settings::from_file(&path)?
            }
            None => {
                info!("No settings file found, using defaults");
                Settings::default()
            }
        },
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

/// First existing settings file, checking AISEARCH_SETTINGS_PATH first
fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("AISEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut paths = vec![
        PathBuf::from("aisearch.yml"),
        PathBuf::from("config/aisearch.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("aisearch/aisearch.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
