//! Settings loading from config.toml

use std::path::{Path, PathBuf};

use mailtriage_core::prelude::*;

use super::types::Settings;
use crate::history::HISTORY_FILENAME;

/// Directory under the platform config dir
pub const CONFIG_DIR: &str = "mailtriage";
pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/mailtriage/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// `<data_local_dir>/mailtriage/email_history.json`
pub fn default_history_path() -> PathBuf {
    mailtriage_core::logging::data_directory().join(HISTORY_FILENAME)
}

/// The configured history path, or the default one
pub fn resolve_history_path(settings: &Settings) -> PathBuf {
    settings
        .storage
        .history_path
        .clone()
        .unwrap_or_else(default_history_path)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `config_path` unless one exists
///
/// Returns true if a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let default_content = r#"# mailtriage configuration

[api]
# Classification service address
base_url = "http://localhost:5000"
# Request timeout in seconds (unset = no overall timeout)
# timeout_secs = 30

[storage]
# history_path = "/path/to/email_history.json"

[ui]
# Show the service status in the header
check_health = true
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
