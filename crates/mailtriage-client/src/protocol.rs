//! Wire types for the classification service

use std::path::PathBuf;

use mailtriage_core::prelude::*;
use mailtriage_core::AnalysisResult;
use serde::{Deserialize, Serialize};

/// What a submission carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyPayload {
    /// Multipart upload, field `file`. Bytes are read when the request is sent.
    File { path: PathBuf, name: String },
    /// JSON body `{"text": ...}`, already trimmed
    Text(String),
}

impl ClassifyPayload {
    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            ClassifyPayload::File { name, .. } => format!("file {}", name),
            ClassifyPayload::Text(text) => format!("text ({} chars)", text.chars().count()),
        }
    }
}

/// JSON body of a text submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextBody {
    pub text: String,
}

/// JSON body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub classifier_loaded: Option<bool>,
    #[serde(default)]
    pub openai_configured: Option<bool>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Map an HTTP status and body to a classification result
///
/// - 2xx: body must decode as [`AnalysisResult`], otherwise [`Error::Decode`]
/// - anything else: [`Error::Server`] carrying the body's `error` field when
///   present; a body that is not JSON yields the generic message
pub fn decode_classify_response(status: u16, body: &[u8]) -> Result<AnalysisResult> {
    if (200..300).contains(&status) {
        return serde_json::from_slice::<AnalysisResult>(body).map_err(|e| {
            warn!("Undecodable classify response ({}): {}", status, e);
            Error::decode(e.to_string())
        });
    }

    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) => err.error.filter(|m| !m.is_empty()),
        Err(e) => {
            debug!("Error response {} without JSON body: {}", status, e);
            None
        }
    };
    Err(Error::server(status, message))
}
