//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use mailtriage_core::{AnalysisResult, HistoryEntry, InputMode, ToastKind};

/// Domain events emitted by the Engine.
///
/// Events are broadcast after each message processing cycle, so subscribers
/// see a consistent view of state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Submission Lifecycle
    // ─────────────────────────────────────────────────────────
    /// A classification request was sent
    SubmissionStarted { mode: InputMode },

    /// The request returned a result
    SubmissionCompleted,

    /// The request failed
    SubmissionFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Results & History
    // ─────────────────────────────────────────────────────────
    /// A result became visible (fresh or reloaded from history)
    ResultDisplayed {
        result: AnalysisResult,
        from_history: bool,
    },

    /// A new entry was stored
    HistoryRecorded { entry: HistoryEntry },

    // ─────────────────────────────────────────────────────────
    // Notifications & Service
    // ─────────────────────────────────────────────────────────
    /// A toast was shown
    Notification { message: String, kind: ToastKind },

    /// Health check changed the known service status
    ApiStatusChanged { online: bool },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event type name for logging/filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::SubmissionStarted { .. } => "submission_started",
            EngineEvent::SubmissionCompleted => "submission_completed",
            EngineEvent::SubmissionFailed { .. } => "submission_failed",
            EngineEvent::ResultDisplayed { .. } => "result_displayed",
            EngineEvent::HistoryRecorded { .. } => "history_recorded",
            EngineEvent::Notification { .. } => "notification",
            EngineEvent::ApiStatusChanged { .. } => "api_status_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
