//! Headless mode - NDJSON event output instead of the TUI
//!
//! Classifies a single email (text or file) and reports progress as
//! newline-delimited JSON on stdout, one event per line, each tagged with an
//! `"event"` field. Useful for scripts and end-to-end tests.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submitted","mode":"text","timestamp":1704700001000}
//! {"event":"history_recorded","id":1704700001800,"date":"08/01/2024, 08:00:01","timestamp":1704700001800}
//! {"event":"result","category":"Produtivo","confidence":87.0,"response":"...","original_text":"...","timestamp":1704700001800}
//! {"event":"notification","message":"Análise concluída com sucesso!","kind":"success","timestamp":1704700001800}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use mailtriage_app::EngineEvent;
use mailtriage_core::{InputMode, ToastKind};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The request left for the classification service
    Submitted { mode: InputMode, timestamp: i64 },

    /// The service classified the email
    Result {
        category: String,
        confidence: f64,
        response: String,
        original_text: String,
        timestamp: i64,
    },

    /// Validation, transport or server failure
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    /// The result was stored in the history
    HistoryRecorded {
        id: i64,
        date: String,
        timestamp: i64,
    },

    /// A toast the TUI would have shown
    Notification {
        message: String,
        kind: ToastKind,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to(&self, out: &mut dyn Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Translate an engine event, if it has a headless counterpart
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::SubmissionStarted { mode } => Some(Self::submitted(*mode)),
            EngineEvent::SubmissionFailed { error } => Some(Self::error(error.clone(), true)),
            EngineEvent::ResultDisplayed { result, .. } => Some(Self::Result {
                category: result.category.clone(),
                confidence: result.confidence,
                response: result.response.clone(),
                original_text: result.original_text.clone(),
                timestamp: Self::now(),
            }),
            EngineEvent::HistoryRecorded { entry } => Some(Self::HistoryRecorded {
                id: entry.id,
                date: entry.date.clone(),
                timestamp: Self::now(),
            }),
            EngineEvent::Notification { message, kind } => {
                Some(Self::notification(message.clone(), *kind))
            }
            EngineEvent::SubmissionCompleted
            | EngineEvent::ApiStatusChanged { .. }
            | EngineEvent::Shutdown => None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn submitted(mode: InputMode) -> Self {
        Self::Submitted {
            mode,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn notification(message: String, kind: ToastKind) -> Self {
        Self::Notification {
            message,
            kind,
            timestamp: Self::now(),
        }
    }
}
