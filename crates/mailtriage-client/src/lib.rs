//! # mailtriage-client - Classification Service Client
//!
//! Talks to the remote email classification service over HTTP.
//!
//! Depends on [`mailtriage_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`ClassifyClient`] - `POST /api/classify` and `GET /api/health`
//!
//! ### Protocol
//! - [`ClassifyPayload`] - What gets submitted (file upload or pasted text)
//! - [`decode_classify_response()`] - Map status + body to a result or error
//! - [`HealthStatus`] - Payload of the health endpoint

pub mod client;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{ClassifyClient, CLASSIFY_PATH, HEALTH_PATH};
pub use protocol::{decode_classify_response, ClassifyPayload, ErrorBody, HealthStatus, TextBody};
