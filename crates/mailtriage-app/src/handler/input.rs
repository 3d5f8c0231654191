//! Input handlers: mode switching, file selection, paste and reset

use std::path::Path;

use mailtriage_core::InputMode;
use tracing::{debug, error, warn};

use crate::input::normalize_dropped_path;
use crate::message::Message;
use crate::state::{AppState, FocusPane};

use super::UpdateResult;

pub fn handle_select_mode(state: &mut AppState, mode: InputMode) -> UpdateResult {
    state.input.set_mode(mode);
    state.focus = FocusPane::Input;
    UpdateResult::none()
}

/// Validate and register a file; rejection raises an error toast
pub fn handle_select_file(state: &mut AppState, path: &Path) -> UpdateResult {
    if let Err(e) = state.input.select_file(path) {
        if e.is_validation() {
            warn!("Rejected {}: {}", path.display(), e);
        } else {
            error!("Failed to inspect {}: {}", path.display(), e);
        }
        state.toast.error(e.to_string());
    }
    UpdateResult::none()
}

/// Bracketed paste: a drop in upload mode, pasted text in text mode
pub fn handle_paste(state: &mut AppState, pasted: String) -> UpdateResult {
    if state.focus != FocusPane::Input {
        debug!("Ignoring paste outside the input panel");
        return UpdateResult::none();
    }

    match state.input.mode() {
        InputMode::Upload => match normalize_dropped_path(&pasted) {
            Some(path) => UpdateResult::message(Message::SelectFile { path }),
            None => UpdateResult::none(),
        },
        InputMode::Text => {
            state.input.insert_text(&pasted);
            UpdateResult::none()
        }
    }
}

/// Start over: clear input, hide the result, focus the input panel
pub fn handle_new_analysis(state: &mut AppState) -> UpdateResult {
    state.input.reset();
    state.result_view.clear();
    state.focus = FocusPane::Input;
    UpdateResult::none()
}
