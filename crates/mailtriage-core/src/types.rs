//! Core domain types for mailtriage

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the analysis history
pub const HISTORY_LIMIT: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Analysis results
// ─────────────────────────────────────────────────────────────────────────────

/// Result of classifying one email, as returned by the remote service
///
/// Extra fields in the server payload (e.g. `success`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Category label, e.g. "Produtivo" or "Improdutivo"
    pub category: String,
    /// Confidence in percent, displayed exactly as received
    pub confidence: f64,
    /// Suggested reply text
    pub response: String,
    /// Excerpt of the submitted content
    pub original_text: String,
}

impl AnalysisResult {
    pub fn new(
        category: impl Into<String>,
        confidence: f64,
        response: impl Into<String>,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            confidence,
            response: response.into(),
            original_text: original_text.into(),
        }
    }

    /// Lower-cased category used to pick the badge style
    pub fn category_slug(&self) -> String {
        category_slug(&self.category)
    }

    /// "Confiança: 87%"
    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence)
    }

    /// Whether the confidence lies in the documented 0-100 range
    pub fn confidence_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.confidence)
    }
}

impl From<&HistoryEntry> for AnalysisResult {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            category: entry.category.clone(),
            confidence: entry.confidence,
            response: entry.response.clone(),
            original_text: entry.preview.clone(),
        }
    }
}

/// Case-normalized category for styling ("Reclamação" -> "reclamação")
pub fn category_slug(category: &str) -> String {
    category.to_lowercase()
}

/// Format a confidence value the way the result view shows it
///
/// Integral values print without a fractional part (`87` not `87.0`).
pub fn format_confidence(confidence: f64) -> String {
    format!("Confiança: {}%", confidence)
}

// ─────────────────────────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────────────────────────

/// A durably stored summary of a past analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation timestamp in milliseconds, unique within the history
    pub id: i64,
    pub category: String,
    pub confidence: f64,
    /// The analysed `original_text`
    pub preview: String,
    pub response: String,
    /// Human-readable creation time (dd/mm/YYYY, HH:MM:SS)
    pub date: String,
}

impl HistoryEntry {
    /// Wrap a result into an entry with the given id and creation time
    pub fn from_result(result: &AnalysisResult, id: i64, created: DateTime<Local>) -> Self {
        Self {
            id,
            category: result.category.clone(),
            confidence: result.confidence,
            preview: result.original_text.clone(),
            response: result.response.clone(),
            date: format_history_date(created),
        }
    }

    pub fn category_slug(&self) -> String {
        category_slug(&self.category)
    }
}

/// pt-BR style local timestamp: `19/10/2026, 14:03:22`
pub fn format_history_date(date: DateTime<Local>) -> String {
    date.format("%d/%m/%Y, %H:%M:%S").to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Input & notifications
// ─────────────────────────────────────────────────────────────────────────────

/// Active input method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Upload a `.txt` / `.pdf` file
    #[default]
    Upload,
    /// Paste the email text
    Text,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Upload => "Upload de Arquivo",
            InputMode::Text => "Colar Texto",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            InputMode::Upload => InputMode::Text,
            InputMode::Text => InputMode::Upload,
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Upload => write!(f, "upload"),
            InputMode::Text => write!(f, "text"),
        }
    }
}

/// Kind of transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> AnalysisResult {
        AnalysisResult::new(
            "Reclamação",
            87.0,
            "Lamentamos o ocorrido.",
            "Please refund my order",
        )
    }

    #[test]
    fn test_confidence_label_integral() {
        assert_eq!(sample().confidence_label(), "Confiança: 87%");
    }

    #[test]
    fn test_confidence_label_fractional() {
        assert_eq!(format_confidence(91.25), "Confiança: 91.25%");
    }

    #[test]
    fn test_category_slug_is_lowercase() {
        assert_eq!(sample().category_slug(), "reclamação");
        assert_eq!(category_slug("Improdutivo"), "improdutivo");
    }

    #[test]
    fn test_confidence_range_check() {
        assert!(sample().confidence_in_range());
        let mut out = sample();
        out.confidence = 140.0;
        assert!(!out.confidence_in_range());
    }

    #[test]
    fn test_result_deserializes_server_payload_with_extra_fields() {
        let json = r#"{
            "success": true,
            "category": "Produtivo",
            "confidence": 92.5,
            "response": "Obrigado",
            "original_text": "Status do chamado?"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.category, "Produtivo");
        assert_eq!(result.confidence, 92.5);
    }

    #[test]
    fn test_history_entry_from_result() {
        let created = Local.with_ymd_and_hms(2026, 10, 19, 14, 3, 22).unwrap();
        let entry = HistoryEntry::from_result(&sample(), 1_700_000_000_000, created);

        assert_eq!(entry.id, 1_700_000_000_000);
        assert_eq!(entry.preview, "Please refund my order");
        assert_eq!(entry.date, "19/10/2026, 14:03:22");
    }

    #[test]
    fn test_history_entry_back_to_result() {
        let entry = HistoryEntry::from_result(&sample(), 1, Local::now());
        assert_eq!(AnalysisResult::from(&entry), sample());
    }

    #[test]
    fn test_history_entry_json_field_names() {
        let entry = HistoryEntry::from_result(&sample(), 42, Local::now());
        let value = serde_json::to_value(&entry).unwrap();
        for field in ["id", "category", "confidence", "preview", "response", "date"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }

    #[test]
    fn test_input_mode_default_is_upload() {
        assert_eq!(InputMode::default(), InputMode::Upload);
        assert_eq!(InputMode::Upload.toggle(), InputMode::Text);
        assert_eq!(InputMode::Text.toggle(), InputMode::Upload);
    }
}
