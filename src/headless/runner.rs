//! Headless mode runner - one classification without the TUI
//!
//! Feeds the request into the engine as if the user had typed or dropped
//! it, then relays engine events as NDJSON until the submission settles.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::broadcast::{self, error::TryRecvError};

use mailtriage_app::{Engine, EngineEvent, Message};
use mailtriage_core::prelude::*;
use mailtriage_core::{InputMode, ToastKind};

use super::HeadlessEvent;

/// How long to wait for a message before re-checking for a quit request
const WAIT_SLICE: Duration = Duration::from_millis(100);

const INTERRUPTED_MESSAGE: &str = "Interrompido antes da resposta do servidor";

/// What to classify
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessRequest {
    Text(String),
    File(PathBuf),
}

impl HeadlessRequest {
    /// Build from the mutually exclusive `--text` / `--file` arguments
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Option<Self> {
        match (text, file) {
            (Some(text), _) => Some(Self::Text(text)),
            (None, Some(path)) => Some(Self::File(path)),
            (None, None) => None,
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            Self::Text(_) => InputMode::Text,
            Self::File(_) => InputMode::Upload,
        }
    }

    /// The input the user would have produced in the TUI
    fn into_messages(self) -> Vec<Message> {
        let select = Message::SelectMode(self.mode());
        match self {
            Self::Text(text) => vec![select, Message::TextChanged { text }],
            Self::File(path) => vec![select, Message::SelectFile { path }],
        }
    }
}

/// What the event stream has told us so far
#[derive(Debug, Default)]
struct Outcome {
    /// `Some(true)` on success, `Some(false)` on a failed request
    finished: Option<bool>,
    /// Most recent error notification (validation problems surface here)
    last_error: Option<String>,
}

/// Run in headless mode, writing events to stdout
///
/// Returns `Ok(true)` when the email was classified.
pub async fn run_headless(engine: Engine, request: HeadlessRequest) -> Result<bool> {
    let mut stdout = io::stdout();
    run_headless_with(engine, request, &mut stdout).await
}

/// Report an engine that could not be built as the run's only event
///
/// `fatal` tells scripts whether retrying without fixing the
/// configuration is pointless.
pub fn report_startup_error(err: &Error, out: &mut dyn Write) {
    error!("Headless startup failed: {}", err);
    HeadlessEvent::error(err.to_string(), err.is_fatal()).write_to(out);
}

/// Run in headless mode, writing events to `out`
pub async fn run_headless_with(
    mut engine: Engine,
    request: HeadlessRequest,
    out: &mut dyn Write,
) -> Result<bool> {
    info!("mailtriage starting in HEADLESS mode ({})", request.mode());

    // The status indicator has no use without a header to show it in
    engine.state.settings.ui.check_health = false;
    let mut events = engine.subscribe();
    engine.start();

    let mut outcome = Outcome::default();
    let success = classify(&mut engine, request, &mut events, out, &mut outcome).await;

    engine.shutdown();
    info!(
        "Headless run finished: {}",
        if success { "success" } else { "failure" }
    );
    Ok(success)
}

async fn classify(
    engine: &mut Engine,
    request: HeadlessRequest,
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut dyn Write,
    outcome: &mut Outcome,
) -> bool {
    for msg in request.into_messages() {
        engine.process_message(msg);
    }
    forward_events(events, out, outcome);
    if let Some(message) = outcome.last_error.take() {
        HeadlessEvent::error(message, true).write_to(out);
        return false;
    }

    engine.process_message(Message::Submit);
    forward_events(events, out, outcome);
    if !engine.state.is_submitting() && outcome.finished.is_none() {
        let message = outcome
            .last_error
            .take()
            .unwrap_or_else(|| engine.state.input.missing_input_message().to_string());
        HeadlessEvent::error(message, true).write_to(out);
        return false;
    }

    while outcome.finished.is_none() {
        if engine.should_quit() {
            HeadlessEvent::error(INTERRUPTED_MESSAGE.to_string(), true).write_to(out);
            return false;
        }
        engine.process_next(WAIT_SLICE).await;
        forward_events(events, out, outcome);
    }

    outcome.finished.unwrap_or(false)
}

/// Relay everything the engine has broadcast so far
fn forward_events(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut dyn Write,
    outcome: &mut Outcome,
) {
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
                continue;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        };

        match &event {
            EngineEvent::SubmissionCompleted => outcome.finished = Some(true),
            EngineEvent::SubmissionFailed { .. } => outcome.finished = Some(false),
            EngineEvent::Notification {
                message,
                kind: ToastKind::Error,
            } => outcome.last_error = Some(message.clone()),
            _ => {}
        }

        if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
            headless.write_to(out);
        }
    }
}
