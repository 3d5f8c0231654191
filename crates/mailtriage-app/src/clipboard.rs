//! System clipboard through the terminal (OSC 52)
//!
//! The terminal emulator owns the clipboard; we hand it a base64 payload.
//! Terminals without OSC 52 support ignore the sequence.

use std::io::Write;

use base64::{engine::general_purpose, Engine as _};
use mailtriage_core::prelude::*;

/// Escape sequence that sets the clipboard selection to `text`
pub fn osc52_sequence(text: &str) -> String {
    format!(
        "\x1b]52;c;{}\x07",
        general_purpose::STANDARD.encode(text.as_bytes())
    )
}

/// Write `text` to the clipboard via stdout
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()?;
    debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_encodes_utf8() {
        let seq = osc52_sequence("Olá");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));

        let payload = &seq["\x1b]52;c;".len()..seq.len() - 1];
        let decoded = general_purpose::STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "Olá");
    }

    #[test]
    fn test_osc52_sequence_empty() {
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }
}
