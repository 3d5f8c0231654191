//! HTTP client for the classification service

use std::time::Duration;

use mailtriage_core::prelude::*;
use mailtriage_core::AnalysisResult;
use reqwest::{multipart, Client};
use url::Url;

use crate::protocol::{decode_classify_response, ClassifyPayload, HealthStatus, TextBody};

/// Classification endpoint, relative to the base URL
pub const CLASSIFY_PATH: &str = "api/classify";

/// Health endpoint, relative to the base URL
pub const HEALTH_PATH: &str = "api/health";

/// Client for `POST /api/classify` and `GET /api/health`
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ClassifyClient {
    http: Client,
    base_url: Url,
}

impl ClassifyClient {
    /// Create a client for the service at `base_url`
    ///
    /// `timeout` of `None` keeps the transport default (no overall timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config_invalid(format!("Invalid endpoint {}: {}", path, e)))
    }

    /// Submit a payload for classification
    pub async fn classify(&self, payload: &ClassifyPayload) -> Result<AnalysisResult> {
        let url = self.endpoint(CLASSIFY_PATH)?;
        info!("Submitting {} to {}", payload.describe(), url);

        let request = match payload {
            ClassifyPayload::File { path, name } => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    warn!("Failed to read {}: {}", path.display(), e);
                    Error::file_unreadable(path)
                })?;
                let part = multipart::Part::bytes(bytes).file_name(name.clone());
                let form = multipart::Form::new().part("file", part);
                self.http.post(url).multipart(form)
            }
            ClassifyPayload::Text(text) => {
                self.http.post(url).json(&TextBody { text: text.clone() })
            }
        };

        let response = request.send().await.map_err(|e| {
            error!("Classify request failed: {}", e);
            Error::transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let result = decode_classify_response(status, &body);
        match &result {
            Ok(r) => info!("Classified as {} ({}%)", r.category, r.confidence),
            Err(e) => warn!("Classification failed with status {}: {}", status, e),
        }
        result
    }

    /// Submit pasted text (convenience wrapper)
    pub async fn classify_text(&self, text: &str) -> Result<AnalysisResult> {
        self.classify(&ClassifyPayload::Text(text.trim().to_string())).await
    }

    /// Query the service health endpoint
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(HEALTH_PATH)?;
        debug!("Checking health at {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(Error::server(status, None));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| Error::decode(e.to_string()))
    }
}

/// Parse the base URL and make sure relative joins append to its path
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| Error::config_invalid(format!("Invalid API URL '{}': {}", base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config_invalid(format!(
            "Unsupported API URL scheme '{}'",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
