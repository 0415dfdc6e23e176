//! Settings parser for .mdeck/config.toml

use std::path::Path;

use mdeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const MDECK_DIR: &str = ".mdeck";

/// Load settings from `<dir>/.mdeck/config.toml`.
///
/// A missing file is normal (defaults). A malformed file logs a warning and
/// falls back to defaults rather than blocking startup.
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(MDECK_DIR).join(CONFIG_FILENAME);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => {
            debug!("no config at {}, using defaults", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&content) {
        Ok(settings) => {
            info!("loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("failed to parse {}: {e}, using defaults", path.display());
            Settings::default()
        }
    }
}
