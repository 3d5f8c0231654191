//! File selection rules for uploads
//!
//! A file is accepted when its name ends in `.txt` or `.pdf` (any case) and it
//! is at most [`MAX_FILE_SIZE`] bytes. The extension is checked first, so an
//! oversized `.docx` reports the format problem.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Accepted upload extensions (compared case-insensitively)
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "pdf"];

/// Maximum upload size: 5 MiB
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// A file that passed validation and is registered for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// File name shown in the UI and sent in the multipart part
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    /// "📄 mail.txt"
    pub fn display_name(&self) -> String {
        format!("📄 {}", self.name)
    }
}

/// True if the name ends with one of [`ACCEPTED_EXTENSIONS`]
pub fn has_accepted_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Reject names without an accepted extension
pub fn validate_file_name(name: &str) -> Result<()> {
    if has_accepted_extension(name) {
        Ok(())
    } else {
        Err(Error::unsupported_format(name))
    }
}

/// Reject sizes above [`MAX_FILE_SIZE`]
pub fn validate_file_size(name: &str, size: u64) -> Result<()> {
    if size > MAX_FILE_SIZE {
        Err(Error::file_too_large(name, size))
    } else {
        Ok(())
    }
}

/// Validate a path on disk and describe it for registration
pub fn validate_file(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::file_unreadable(path))?;

    validate_file_name(&name)?;

    let metadata = std::fs::metadata(path).map_err(|_| Error::file_unreadable(path))?;
    if !metadata.is_file() {
        return Err(Error::file_unreadable(path));
    }

    validate_file_size(&name, metadata.len())?;

    Ok(SelectedFile {
        path: path.to_path_buf(),
        name,
        size: metadata.len(),
    })
}
