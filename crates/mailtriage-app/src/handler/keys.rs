//! Key event handlers for the focused panel

use std::path::PathBuf;

use mailtriage_core::InputMode;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FocusPane};

/// Convert key events to messages based on the focused panel
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }

    match state.focus {
        FocusPane::Input => match state.input.mode() {
            InputMode::Upload => handle_key_path_input(state, key),
            InputMode::Text => handle_key_text_input(state, key),
        },
        FocusPane::Result => handle_key_result(key),
        FocusPane::History => handle_key_history(state, key),
    }
}

/// Shortcuts available regardless of focus
fn handle_key_global(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => Some(Message::Quit),
        InputKey::CharCtrl('s') | InputKey::F(5) => Some(Message::Submit),
        InputKey::CharCtrl('u') | InputKey::F(1) => Some(Message::SelectMode(InputMode::Upload)),
        InputKey::CharCtrl('t') | InputKey::F(2) => Some(Message::SelectMode(InputMode::Text)),
        InputKey::CharCtrl('n') => Some(Message::NewAnalysis),
        InputKey::CharCtrl('y') => Some(Message::CopyResponse),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        _ => None,
    }
}

/// Path field of the upload picker
fn handle_key_path_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut text = state.input.path_input().to_string();
            text.push(c);
            Some(Message::PathChanged { text })
        }
        InputKey::Backspace => {
            let mut text = state.input.path_input().to_string();
            text.pop()?;
            Some(Message::PathChanged { text })
        }
        InputKey::Esc => Some(Message::PathChanged {
            text: String::new(),
        }),
        InputKey::Enter => {
            let path = state.input.path_input().trim();
            if path.is_empty() {
                None
            } else {
                Some(Message::SelectFile {
                    path: PathBuf::from(path),
                })
            }
        }
        _ => None,
    }
}

/// Multi-line email text
fn handle_key_text_input(state: &AppState, key: InputKey) -> Option<Message> {
    let mut text = state.input.text().to_string();
    match key {
        InputKey::Char(c) => text.push(c),
        InputKey::Enter => text.push('\n'),
        InputKey::Backspace => {
            text.pop()?;
        }
        InputKey::CharCtrl('l') => text.clear(),
        _ => return None,
    }
    Some(Message::TextChanged { text })
}

fn handle_key_result(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('c') => Some(Message::CopyResponse),
        InputKey::Char('n') => Some(Message::NewAnalysis),
        InputKey::Up | InputKey::Char('k') | InputKey::PageUp => Some(Message::ScrollResultUp),
        InputKey::Down | InputKey::Char('j') | InputKey::PageDown => {
            Some(Message::ScrollResultDown)
        }
        InputKey::Esc => Some(Message::Focus(FocusPane::Input)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_history(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::HistorySelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::HistorySelectNext),
        InputKey::Enter => state
            .selected_history_id()
            .map(|id| Message::LoadHistoryEntry { id }),
        InputKey::CharCtrl('d') => Some(Message::ClearHistory),
        InputKey::Esc => Some(Message::Focus(FocusPane::Input)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
