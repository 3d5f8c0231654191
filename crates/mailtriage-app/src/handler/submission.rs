//! Submission handlers and the result display routine

use mailtriage_core::AnalysisResult;
use tracing::{debug, info, warn};

use crate::state::{AppState, FocusPane, SubmissionPhase};

use super::{UpdateAction, UpdateResult};

/// Toast after a fresh result
pub const SUCCESS_MESSAGE: &str = "Análise concluída com sucesso!";

/// Submit the active input, or explain why it cannot be submitted
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.is_submitting() {
        debug!("Submission already in flight, ignoring");
        return UpdateResult::none();
    }

    let Some(payload) = state.input.payload() else {
        let message = state.input.missing_input_message();
        debug!("Nothing to submit in {} mode", state.input.mode());
        state.toast.error(message);
        return UpdateResult::none();
    };

    info!("Submitting {}", payload.describe());
    state.submission = SubmissionPhase::Submitting;
    state.submission_error = None;
    state.loading_frame = 0;
    state.result_view.hide();
    if state.focus == FocusPane::Result {
        state.focus = FocusPane::Input;
    }

    UpdateResult::action(UpdateAction::Classify { payload })
}

pub fn handle_classification_completed(
    state: &mut AppState,
    result: AnalysisResult,
) -> UpdateResult {
    state.submission = SubmissionPhase::Idle;

    let entry_id = state.history.record(&result).id;
    debug!("Recorded history entry {}", entry_id);
    state.history_selected = 0;

    display_result(state, result);
    state.toast.success(SUCCESS_MESSAGE);
    UpdateResult::none()
}

pub fn handle_classification_failed(state: &mut AppState, error: String) -> UpdateResult {
    state.submission = SubmissionPhase::Idle;
    warn!("Classification failed: {}", error);
    state.toast.error(format!("Erro: {}", error));
    state.submission_error = Some(error);
    UpdateResult::none()
}

/// Show a result (fresh or from history) and bring it into view
pub fn display_result(state: &mut AppState, result: AnalysisResult) {
    if !result.confidence_in_range() {
        warn!(
            "Confidence {} outside [0, 100] for category {}",
            result.confidence, result.category
        );
    }
    state.result_view.display(result);
    state.focus = FocusPane::Result;
}

/// Copy the displayed response; no-op without one
pub fn handle_copy_response(state: &mut AppState) -> UpdateResult {
    match state.result_view.current() {
        Some(result) => UpdateResult::action(UpdateAction::CopyToClipboard {
            text: result.response.clone(),
        }),
        None => UpdateResult::none(),
    }
}
