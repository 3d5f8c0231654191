//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{ApiStatus, AppPhase, AppState};
use tracing::{info, warn};

use super::{history, input, keys::handle_key, submission, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => input::handle_paste(state, text),

        Message::Tick => {
            state.tick(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Input Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectMode(mode) => input::handle_select_mode(state, mode),
        Message::PathChanged { text } => {
            state.input.set_path_input(text);
            UpdateResult::none()
        }
        Message::TextChanged { text } => {
            state.input.set_text(text);
            UpdateResult::none()
        }
        Message::SelectFile { path } => input::handle_select_file(state, &path),
        Message::NewAnalysis => input::handle_new_analysis(state),

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => submission::handle_submit(state),
        Message::ClassificationCompleted { result } => {
            submission::handle_classification_completed(state, result)
        }
        Message::ClassificationFailed { error } => {
            submission::handle_classification_failed(state, error)
        }

        // ─────────────────────────────────────────────────────────
        // Result Messages
        // ─────────────────────────────────────────────────────────
        Message::CopyResponse => submission::handle_copy_response(state),
        Message::ResponseCopied => {
            state.result_view.mark_copied(Instant::now());
            state.toast.success("Resposta copiada!");
            UpdateResult::none()
        }
        Message::CopyFailed { error } => {
            warn!("Clipboard write failed: {}", error);
            state.toast.error(format!("Erro: {}", error));
            UpdateResult::none()
        }
        Message::ScrollResultUp => {
            state.result_view.scroll_up();
            UpdateResult::none()
        }
        Message::ScrollResultDown => {
            state.result_view.scroll_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // History Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadHistoryEntry { id } => history::handle_load_entry(state, id),
        Message::HistorySelectNext => history::handle_select_next(state),
        Message::HistorySelectPrevious => history::handle_select_previous(state),
        Message::ClearHistory => history::handle_clear(state),

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next(state.result_view.is_visible());
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus = state.focus.previous(state.result_view.is_visible());
            UpdateResult::none()
        }
        Message::Focus(pane) => {
            state.focus = pane;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Service Health
        // ─────────────────────────────────────────────────────────
        Message::CheckHealth => UpdateResult::action(UpdateAction::CheckHealth),
        Message::HealthChecked { status } => {
            if status.is_healthy() {
                info!("Service healthy at {}", state.settings.api.base_url);
                state.api_status = ApiStatus::Online(status);
            } else {
                warn!("Service reports status '{}'", status.status);
                state.api_status = ApiStatus::Offline;
            }
            UpdateResult::none()
        }
        Message::HealthCheckFailed { error } => {
            warn!("Health check failed: {}", error);
            state.api_status = ApiStatus::Offline;
            UpdateResult::none()
        }
    }
}
