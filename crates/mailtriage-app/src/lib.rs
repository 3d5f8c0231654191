//! mailtriage-app - Application state and orchestration for mailtriage
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, configuration
//! loading, the input controller, the history store and transient notifications.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod history;
pub mod input;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod toast;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use history::{FileBackend, HistoryBackend, HistoryStore, MemoryBackend, HISTORY_FILENAME};
pub use input::InputController;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{ApiStatus, AppPhase, AppState, FocusPane, SubmissionPhase};
pub use toast::{Notifier, Toast, TOAST_DURATION};

// Re-export client types for the TUI
pub use mailtriage_client::{ClassifyClient, ClassifyPayload, HealthStatus};
