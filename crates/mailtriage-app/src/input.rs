//! Input controller: mode, registered upload, path field and text buffer
//!
//! Submit eligibility is always computed from the current fields, never
//! cached.

use std::path::{Path, PathBuf};

use mailtriage_client::ClassifyPayload;
use mailtriage_core::prelude::*;
use mailtriage_core::{validate_file, InputMode, SelectedFile};

/// Toast shown when submitting in upload mode without a file
pub const MISSING_FILE_MESSAGE: &str = "Selecione um arquivo";

/// Toast shown when submitting in text mode without text
pub const MISSING_TEXT_MESSAGE: &str = "Digite ou cole o texto do email";

#[derive(Debug, Clone, Default)]
pub struct InputController {
    mode: InputMode,
    file: Option<SelectedFile>,
    path_input: String,
    text: String,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            debug!("Input mode: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Validate `path` and register it for upload
    ///
    /// On rejection the previously registered file (if any) is cleared.
    pub fn select_file(&mut self, path: &Path) -> Result<&SelectedFile> {
        let path = expand_home(path);
        match validate_file(&path) {
            Ok(selected) => {
                info!("Registered {} ({} bytes)", selected.name, selected.size);
                self.path_input = path.display().to_string();
                Ok(&*self.file.insert(selected))
            }
            Err(e) => {
                self.file = None;
                Err(e)
            }
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn set_path_input(&mut self, text: impl Into<String>) {
        self.path_input = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append pasted text at the end of the buffer
    pub fn insert_text(&mut self, pasted: &str) {
        self.text.push_str(&pasted.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    /// True when the active mode has something to submit
    pub fn can_submit(&self) -> bool {
        match self.mode {
            InputMode::Upload => self.file.is_some(),
            InputMode::Text => !self.text.trim().is_empty(),
        }
    }

    /// Request payload for the active mode, or `None` when it lacks input
    pub fn payload(&self) -> Option<ClassifyPayload> {
        match self.mode {
            InputMode::Upload => self.file.as_ref().map(|f| ClassifyPayload::File {
                path: f.path.clone(),
                name: f.name.clone(),
            }),
            InputMode::Text => {
                let trimmed = self.text.trim();
                (!trimmed.is_empty()).then(|| ClassifyPayload::Text(trimmed.to_string()))
            }
        }
    }

    /// Message shown when submitting without input in the active mode
    pub fn missing_input_message(&self) -> &'static str {
        match self.mode {
            InputMode::Upload => MISSING_FILE_MESSAGE,
            InputMode::Text => MISSING_TEXT_MESSAGE,
        }
    }

    /// Clear the file, the path field and the text. The mode is kept.
    pub fn reset(&mut self) {
        self.file = None;
        self.path_input.clear();
        self.text.clear();
    }
}

/// Turn a terminal drop (bracketed paste of a path) into a path
///
/// Uses the first non-empty line, strips matching quotes, a `file://` prefix
/// and shell backslash escapes.
pub fn normalize_dropped_path(raw: &str) -> Option<PathBuf> {
    let line = raw.lines().map(str::trim).find(|l| !l.is_empty())?;

    let unquoted = ['\'', '"']
        .iter()
        .find_map(|q| line.strip_prefix(*q).and_then(|rest| rest.strip_suffix(*q)))
        .unwrap_or(line);

    let without_scheme = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let unescaped = without_scheme.replace("\\ ", " ");

    if unescaped.is_empty() {
        None
    } else {
        Some(PathBuf::from(unescaped))
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
