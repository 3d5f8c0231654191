//! Configuration file parsing for mailtriage
//!
//! Supports `<config_dir>/mailtriage/config.toml` (or an explicit path).

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, default_history_path, init_config_file, load_settings,
    resolve_history_path, CONFIG_DIR, CONFIG_FILENAME,
};
pub use types::{ApiSettings, Settings, StorageSettings, UiSettings, DEFAULT_API_URL};
