//! Tests for handler module

use std::path::PathBuf;

use super::*;
use crate::history::MemoryBackend;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ApiStatus, AppPhase, AppState, FocusPane};
use crate::HistoryStore;
use mailtriage_client::{ClassifyPayload, HealthStatus};
use mailtriage_core::{AnalysisResult, InputMode, ToastKind, MAX_FILE_SIZE};
use tempfile::tempdir;

/// Run a message and every follow-up, collecting the emitted actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn toast(state: &AppState) -> Option<(String, ToastKind)> {
    state
        .toast
        .current()
        .map(|t| (t.message.clone(), t.kind))
}

fn complaint() -> AnalysisResult {
    AnalysisResult::new(
        "Reclamação",
        87.0,
        "Sentimos muito pelo transtorno.",
        "Please refund my order",
    )
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        run(state, Message::Key(InputKey::Char(c)));
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_any_panel() {
    let mut state = AppState::new();
    for focus in [FocusPane::Input, FocusPane::Result, FocusPane::History] {
        state.focus = focus;
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }
}

#[test]
fn test_q_types_into_text_field_but_quits_from_history() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::TextChanged { .. })
    ));

    state.focus = FocusPane::History;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Mode & input
// ─────────────────────────────────────────────────────────

#[test]
fn test_mode_shortcuts() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::CharCtrl('t')));
    assert_eq!(state.input.mode(), InputMode::Text);
    run(&mut state, Message::Key(InputKey::F(1)));
    assert_eq!(state.input.mode(), InputMode::Upload);
    run(&mut state, Message::Key(InputKey::F(2)));
    assert_eq!(state.input.mode(), InputMode::Text);
}

#[test]
fn test_select_mode_focuses_input() {
    let mut state = AppState::new();
    state.focus = FocusPane::History;
    run(&mut state, Message::SelectMode(InputMode::Text));
    assert_eq!(state.focus, FocusPane::Input);
}

#[test]
fn test_text_editing_keys() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);

    type_text(&mut state, "Oi");
    run(&mut state, Message::Key(InputKey::Enter));
    type_text(&mut state, "tchau!");
    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.input.text(), "Oi\ntchau");

    run(&mut state, Message::Key(InputKey::CharCtrl('l')));
    assert_eq!(state.input.text(), "");

    // Backspace on empty text does nothing
    assert!(handle_key(&state, InputKey::Backspace).is_none());
}

#[test]
fn test_path_field_enter_selects_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mail.txt");
    std::fs::write(&path, "Olá").unwrap();

    let mut state = AppState::new();
    type_text(&mut state, &path.display().to_string());
    run(&mut state, Message::Key(InputKey::Enter));

    let file = state.input.file().expect("file registered");
    assert_eq!(file.display_name(), "📄 mail.txt");
    assert!(state.submit_enabled());
    assert!(toast(&state).is_none());
}

#[test]
fn test_path_field_enter_when_empty_does_nothing() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Enter).is_none());
}

#[test]
fn test_unsupported_file_is_rejected_with_toast() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mail.docx");
    std::fs::write(&path, "x").unwrap();

    let mut state = AppState::new();
    run(&mut state, Message::SelectFile { path });

    assert!(state.input.file().is_none());
    assert!(!state.submit_enabled());
    assert_eq!(
        toast(&state),
        Some((
            "Formato não suportado. Use .txt ou .pdf".to_string(),
            ToastKind::Error
        ))
    );
}

#[test]
fn test_oversized_file_is_rejected_with_toast() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("big.pdf");
    std::fs::File::create(&path)
        .unwrap()
        .set_len(MAX_FILE_SIZE + 1)
        .unwrap();

    let mut state = AppState::new();
    run(&mut state, Message::SelectFile { path });

    assert!(state.input.file().is_none());
    assert_eq!(
        toast(&state),
        Some((
            "Arquivo muito grande. Máximo: 5MB".to_string(),
            ToastKind::Error
        ))
    );
}

#[test]
fn test_paste_in_upload_mode_is_a_drop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dropped.pdf");
    std::fs::write(&path, b"%PDF").unwrap();

    let mut state = AppState::new();
    run(&mut state, Message::Paste(format!("'{}'\n", path.display())));

    assert_eq!(state.input.file().unwrap().name, "dropped.pdf");
}

#[test]
fn test_paste_in_text_mode_appends() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    state.input.set_text("Assunto: ");
    run(&mut state, Message::Paste("linha 1\r\nlinha 2".to_string()));
    assert_eq!(state.input.text(), "Assunto: linha 1\nlinha 2");
}

#[test]
fn test_paste_outside_input_panel_is_ignored() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    state.focus = FocusPane::History;
    run(&mut state, Message::Paste("hello".to_string()));
    assert!(state.input.text().is_empty());
}

// ─────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────

#[test]
fn test_empty_upload_submission_fails_fast() {
    let mut state = AppState::new();

    let actions = run(&mut state, Message::Submit);

    assert!(actions.is_empty());
    assert!(!state.is_submitting());
    assert!(!state.submit_enabled());
    assert_eq!(
        toast(&state),
        Some(("Selecione um arquivo".to_string(), ToastKind::Error))
    );
}

#[test]
fn test_empty_text_submission_fails_fast() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    state.input.set_text("   \n  ");

    let actions = run(&mut state, Message::Key(InputKey::CharCtrl('s')));

    assert!(actions.is_empty());
    assert!(!state.is_submitting());
    assert_eq!(
        toast(&state),
        Some((
            "Digite ou cole o texto do email".to_string(),
            ToastKind::Error
        ))
    );
}

#[test]
fn test_text_submission_scenario() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectMode(InputMode::Text));
    run(
        &mut state,
        Message::TextChanged {
            text: "  Please refund my order  ".to_string(),
        },
    );
    assert!(state.submit_enabled());

    let actions = run(&mut state, Message::Submit);
    assert_eq!(
        actions,
        vec![UpdateAction::Classify {
            payload: ClassifyPayload::Text("Please refund my order".to_string())
        }]
    );
    assert!(state.is_submitting());
    assert!(!state.submit_enabled());
    assert!(!state.result_view.is_visible());

    run(
        &mut state,
        Message::ClassificationCompleted {
            result: complaint(),
        },
    );

    assert!(!state.is_submitting());
    let shown = state.result_view.current().expect("result visible");
    assert_eq!(shown.category, "Reclamação");
    assert_eq!(shown.category_slug(), "reclamação");
    assert_eq!(shown.confidence_label(), "Confiança: 87%");
    assert_eq!(state.focus, FocusPane::Result);
    assert_eq!(state.result_view.scroll, 0);

    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history.entries()[0].preview, "Please refund my order");
    assert_eq!(
        toast(&state),
        Some((
            "Análise concluída com sucesso!".to_string(),
            ToastKind::Success
        ))
    );
}

#[test]
fn test_upload_submission_builds_file_payload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mail.TXT");
    std::fs::write(&path, "Olá").unwrap();

    let mut state = AppState::new();
    run(&mut state, Message::SelectFile { path: path.clone() });
    let actions = run(&mut state, Message::Submit);

    assert_eq!(
        actions,
        vec![UpdateAction::Classify {
            payload: ClassifyPayload::File {
                path,
                name: "mail.TXT".to_string()
            }
        }]
    );
}

#[test]
fn test_submit_while_in_flight_is_ignored() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    state.input.set_text("hello");

    assert_eq!(run(&mut state, Message::Submit).len(), 1);
    assert!(run(&mut state, Message::Submit).is_empty());
    assert!(state.toast.current().is_none());
}

#[test]
fn test_server_error_scenario() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    state.input.set_text("hello");
    run(&mut state, Message::Submit);

    run(
        &mut state,
        Message::ClassificationFailed {
            error: "unsupported format".to_string(),
        },
    );

    assert!(!state.is_submitting());
    assert!(state.submit_enabled());
    assert!(!state.result_view.is_visible());
    assert!(state.history.is_empty());
    assert_eq!(
        toast(&state),
        Some(("Erro: unsupported format".to_string(), ToastKind::Error))
    );
}

#[test]
fn test_failure_hides_previous_result_until_next_success() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    state.input.set_text("hello");
    run(&mut state, Message::Submit);
    run(
        &mut state,
        Message::ClassificationCompleted {
            result: complaint(),
        },
    );
    assert!(state.result_view.is_visible());

    run(&mut state, Message::Submit);
    run(
        &mut state,
        Message::ClassificationFailed {
            error: "Erro ao processar".to_string(),
        },
    );
    assert!(!state.result_view.is_visible());
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_out_of_range_confidence_passes_through() {
    let mut state = AppState::new();
    let result = AnalysisResult::new("Produtivo", 130.0, "ok", "texto");
    run(&mut state, Message::ClassificationCompleted { result });

    assert_eq!(
        state.result_view.current().unwrap().confidence_label(),
        "Confiança: 130%"
    );
}

// ─────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────

#[test]
fn test_twelve_results_keep_newest_ten() {
    let mut state = AppState::new();
    for n in 1..=12 {
        let result = AnalysisResult::new("Produtivo", 90.0, "ok", format!("R{}", n));
        run(&mut state, Message::ClassificationCompleted { result });
    }

    let previews: Vec<&str> = state
        .history
        .entries()
        .iter()
        .map(|e| e.preview.as_str())
        .collect();
    assert_eq!(
        previews,
        vec!["R12", "R11", "R10", "R9", "R8", "R7", "R6", "R5", "R4", "R3"]
    );
}

#[test]
fn test_load_unknown_entry_changes_nothing() {
    let mut state = AppState::new();
    state.focus = FocusPane::History;

    run(&mut state, Message::LoadHistoryEntry { id: 42 });

    assert!(!state.result_view.is_visible());
    assert!(state.toast.current().is_none());
    assert_eq!(state.focus, FocusPane::History);
}

#[test]
fn test_display_record_reload_round_trip() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::ClassificationCompleted {
            result: complaint(),
        },
    );
    let id = state.history.entries()[0].id;

    run(&mut state, Message::NewAnalysis);
    assert!(!state.result_view.is_visible());

    state.focus = FocusPane::History;
    run(&mut state, Message::Key(InputKey::Enter));

    let shown = state.result_view.current().expect("reloaded");
    assert_eq!(shown, &complaint());
    assert_eq!(state.history.entries()[0].id, id);
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.focus, FocusPane::Result);
    assert_eq!(
        toast(&state),
        Some((
            "Item do histórico carregado".to_string(),
            ToastKind::Success
        ))
    );
}

#[test]
fn test_history_navigation_and_load_selected() {
    let mut state = AppState::new();
    for n in 1..=3 {
        let result = AnalysisResult::new("Produtivo", 90.0, "ok", format!("R{}", n));
        run(&mut state, Message::ClassificationCompleted { result });
    }
    state.focus = FocusPane::History;

    run(&mut state, Message::Key(InputKey::Down));
    run(&mut state, Message::Key(InputKey::Down));
    run(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.history_selected, 2);

    run(&mut state, Message::Key(InputKey::Up));
    run(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(
        state.result_view.current().unwrap().original_text,
        "R2".to_string()
    );
}

#[test]
fn test_clear_history_persists() {
    let backend = MemoryBackend::new();
    let mut state = AppState::with_settings(
        Default::default(),
        HistoryStore::load(Box::new(backend.clone())),
    );
    run(
        &mut state,
        Message::ClassificationCompleted {
            result: complaint(),
        },
    );
    state.focus = FocusPane::History;

    run(&mut state, Message::Key(InputKey::CharCtrl('d')));

    assert!(state.history.is_empty());
    assert_eq!(backend.contents().as_deref(), Some("[]"));
}

// ─────────────────────────────────────────────────────────
// Copy & new analysis
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_without_result_is_noop() {
    let mut state = AppState::new();
    assert!(run(&mut state, Message::CopyResponse).is_empty());
}

#[test]
fn test_copy_response_flow() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::ClassificationCompleted {
            result: complaint(),
        },
    );

    let actions = run(&mut state, Message::Key(InputKey::Char('c')));
    assert_eq!(
        actions,
        vec![UpdateAction::CopyToClipboard {
            text: "Sentimos muito pelo transtorno.".to_string()
        }]
    );

    run(&mut state, Message::ResponseCopied);
    assert!(state.result_view.is_copied());
    assert_eq!(
        toast(&state),
        Some(("Resposta copiada!".to_string(), ToastKind::Success))
    );
}

#[test]
fn test_new_analysis_resets_input_and_result() {
    let mut state = AppState::new();
    state.input.set_mode(InputMode::Text);
    state.input.set_text("abc");
    run(
        &mut state,
        Message::ClassificationCompleted {
            result: complaint(),
        },
    );

    run(&mut state, Message::Key(InputKey::CharCtrl('n')));

    assert!(state.input.text().is_empty());
    assert!(!state.result_view.is_visible());
    assert_eq!(state.focus, FocusPane::Input);
    assert_eq!(state.history.len(), 1);
}

// ─────────────────────────────────────────────────────────
// Focus & health
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_cycles_focus() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, FocusPane::History);
    run(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focus, FocusPane::Input);
}

#[test]
fn test_health_messages_update_status() {
    let mut state = AppState::new();
    assert_eq!(
        run(&mut state, Message::CheckHealth),
        vec![UpdateAction::CheckHealth]
    );

    let status = HealthStatus {
        status: "healthy".to_string(),
        classifier_loaded: Some(true),
        openai_configured: None,
    };
    run(
        &mut state,
        Message::HealthChecked {
            status: status.clone(),
        },
    );
    assert_eq!(state.api_status, ApiStatus::Online(status));

    run(
        &mut state,
        Message::HealthCheckFailed {
            error: "connection refused".to_string(),
        },
    );
    assert_eq!(state.api_status, ApiStatus::Offline);
    assert!(state.toast.current().is_none());
}

#[test]
fn test_select_file_message_from_path() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::SelectFile {
            path: PathBuf::from("/definitely/not/here.txt"),
        },
    );
    assert_eq!(
        toast(&state),
        Some((
            "Arquivo não encontrado: /definitely/not/here.txt".to_string(),
            ToastKind::Error
        ))
    );
}
