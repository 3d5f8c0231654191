//! Configuration types for mailtriage

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Service address used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Global settings from config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Classification service settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL; endpoints are resolved relative to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request timeout; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Where the history lives
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StorageSettings {
    /// Overrides `<data_local_dir>/mailtriage/email_history.json`
    #[serde(default)]
    pub history_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiSettings {
    /// Query `/api/health` at startup
    #[serde(default = "default_true")]
    pub check_health: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            check_health: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
