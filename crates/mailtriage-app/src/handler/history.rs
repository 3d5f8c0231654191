//! History panel handlers

use mailtriage_core::AnalysisResult;
use tracing::{debug, info};

use crate::state::AppState;

use super::{submission::display_result, UpdateResult};

/// Toast after reloading a stored analysis
pub const LOADED_MESSAGE: &str = "Item do histórico carregado";

/// Display a stored entry; unknown ids are ignored
pub fn handle_load_entry(state: &mut AppState, id: i64) -> UpdateResult {
    let Some(entry) = state.history.get(id) else {
        debug!("No history entry {}", id);
        return UpdateResult::none();
    };

    let result = AnalysisResult::from(entry);
    display_result(state, result);
    state.toast.success(LOADED_MESSAGE);
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    if state.history_selected + 1 < state.history.len() {
        state.history_selected += 1;
    }
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.history_selected = state.history_selected.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    if state.history.is_empty() {
        return UpdateResult::none();
    }
    info!("Clearing {} history entries", state.history.len());
    state.history.clear();
    state.clamp_history_selection();
    UpdateResult::none()
}
