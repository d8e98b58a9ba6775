//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use pomaster_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "pomaster";

/// Default settings path: `~/.config/pomaster/config.toml`
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `path`, or the default location when `None`.
///
/// A missing file is normal (defaults). A malformed file is logged and
/// ignored (defaults) rather than failing startup.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            return Settings::default();
        }
    };

    match toml::from_str(&content) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Invalid config at {}: {}, using defaults", path.display(), e);
            Settings::default()
        }
    }
}
