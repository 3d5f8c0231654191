//! mailtriage - terminal front-end for an email classification service
//!
//! Wires configuration, the history file and the engine together and hands
//! them to either the TUI or the headless runner.

pub mod headless;

pub use headless::runner::{report_startup_error, run_headless, run_headless_with, HeadlessRequest};

use mailtriage_app::config::{resolve_history_path, Settings};
use mailtriage_app::{Engine, FileBackend, HistoryStore};
use mailtriage_core::prelude::*;

/// Build an engine whose history lives in the configured file
pub fn build_engine(settings: Settings) -> Result<Engine> {
    let history_path = resolve_history_path(&settings);
    info!("History file: {}", history_path.display());
    let history = HistoryStore::load(Box::new(FileBackend::new(history_path)));
    Engine::new(settings, history)
}

/// Run the interactive terminal UI
pub async fn run(settings: Settings) -> Result<()> {
    let engine = build_engine(settings)?;
    let result = mailtriage_tui::run(engine).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("mailtriage exiting");
    result
}
