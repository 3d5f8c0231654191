//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the service
//! client and the shutdown signal. Both runners feed it messages and read
//! state (TUI) or events (headless) back out.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::history::HistoryStore;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{ApiStatus, AppState};
use mailtriage_client::ClassifyClient;
use mailtriage_core::prelude::*;

/// Capacity of the message and event channels
const CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    submitting: bool,
    result_seq: u64,
    toast_seq: u64,
    history_head: Option<i64>,
    api_online: Option<bool>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            submitting: state.is_submitting(),
            result_seq: state.result_view.seq(),
            toast_seq: state.toast.seq(),
            history_head: state.history.latest().map(|e| e.id),
            api_online: match state.api_status {
                ApiStatus::Unknown => None,
                ApiStatus::Online(_) => Some(true),
                ApiStatus::Offline => Some(false),
            },
        }
    }
}

/// Orchestration engine for mailtriage.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Client used by spawned classification and health tasks
    client: ClassifyClient,

    /// Send `true` to stop in-flight requests
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,

    signal_task: Option<JoinHandle<()>>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine from settings and a loaded history.
    ///
    /// Fails only when the configured API URL is unusable.
    pub fn new(settings: Settings, history: HistoryStore) -> Result<Self> {
        let timeout = settings.api.timeout();
        let client = ClassifyClient::new(&settings.api.base_url, timeout)?;
        info!(
            "Engine using {} (timeout: {})",
            client.base_url(),
            timeout
                .map(|t| format!("{}s", t.as_secs()))
                .unwrap_or_else(|| "none".to_string())
        );

        let state = AppState::with_settings(settings, history);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
            client,
            shutdown_tx,
            shutdown_rx,
            signal_task: None,
            event_tx,
        })
    }

    /// Install the signal handler and run startup actions (health check).
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.signal_task = Some(signals::spawn_signal_handler(self.msg_tx.clone()));
        if self.state.settings.ui.check_health {
            self.process_message(Message::CheckHealth);
        }
    }

    /// Subscribe to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.client,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false if no message arrived within `timeout`.
    pub async fn process_next(&mut self, timeout: Duration) -> bool {
        match tokio::time::timeout(timeout, self.msg_rx.recv()).await {
            Ok(Some(msg)) => {
                self.process_message(msg);
                true
            }
            Ok(None) | Err(_) => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn client(&self) -> &ClassifyClient {
        &self.client
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop in-flight requests and the signal handler.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
        debug!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if !pre.submitting && post.submitting {
            self.emit(EngineEvent::SubmissionStarted {
                mode: self.state.input.mode(),
            });
        }

        let recorded = post.history_head != pre.history_head && post.history_head.is_some();
        if recorded {
            if let Some(entry) = self.state.history.latest() {
                self.emit(EngineEvent::HistoryRecorded {
                    entry: entry.clone(),
                });
            }
        }

        if post.result_seq != pre.result_seq {
            if let Some(result) = self.state.result_view.current() {
                self.emit(EngineEvent::ResultDisplayed {
                    result: result.clone(),
                    from_history: !recorded,
                });
            }
        }

        if post.toast_seq != pre.toast_seq {
            if let Some(toast) = self.state.toast.current() {
                self.emit(EngineEvent::Notification {
                    message: toast.message.clone(),
                    kind: toast.kind,
                });
            }
        }

        if pre.submitting && !post.submitting {
            match &self.state.submission_error {
                Some(error) => self.emit(EngineEvent::SubmissionFailed {
                    error: error.clone(),
                }),
                None => self.emit(EngineEvent::SubmissionCompleted),
            }
        }

        if pre.api_online != post.api_online {
            if let Some(online) = post.api_online {
                self.emit(EngineEvent::ApiStatusChanged { online });
            }
        }
    }

    /// send() returns Err only if there are no receivers; that's fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
