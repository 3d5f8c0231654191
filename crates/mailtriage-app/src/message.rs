//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::input_key::InputKey;
use crate::state::FocusPane;
use mailtriage_client::HealthStatus;
use mailtriage_core::{AnalysisResult, InputMode};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal. Dropping a file onto most terminals
    /// arrives as a paste of its path.
    Paste(String),

    /// Tick event for periodic updates (spinner, toast expiry)
    Tick,

    /// Quit (Ctrl+C, `q`, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Input Messages
    // ─────────────────────────────────────────────────────────
    /// Switch the active input method
    SelectMode(InputMode),

    /// Path field of the upload picker changed
    PathChanged { text: String },

    /// Pasted email text changed
    TextChanged { text: String },

    /// Validate and register a file for upload
    SelectFile { path: PathBuf },

    /// Reset input, hide the result and refocus the input panel
    NewAnalysis,

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the active input for classification
    Submit,

    /// The service returned a result
    ClassificationCompleted { result: AnalysisResult },

    /// The request failed; `error` is the user-facing reason
    ClassificationFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Result Messages
    // ─────────────────────────────────────────────────────────
    /// Copy the displayed response to the clipboard
    CopyResponse,

    /// Clipboard write succeeded
    ResponseCopied,

    /// Clipboard write failed
    CopyFailed { error: String },

    ScrollResultUp,
    ScrollResultDown,

    // ─────────────────────────────────────────────────────────
    // History Messages
    // ─────────────────────────────────────────────────────────
    /// Show a stored entry in the result view
    LoadHistoryEntry { id: i64 },

    HistorySelectNext,
    HistorySelectPrevious,

    /// Remove every stored entry
    ClearHistory,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    Focus(FocusPane),

    // ─────────────────────────────────────────────────────────
    // Service Health
    // ─────────────────────────────────────────────────────────
    /// Query `GET /api/health`
    CheckHealth,

    HealthChecked { status: HealthStatus },

    HealthCheckFailed { error: String },
}
