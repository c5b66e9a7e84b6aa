//! Shared plumbing for the provider clients.
//!
//! The completion, speech synthesis, and transcription clients all talk to
//! the same OpenAI-compatible backend over HTTPS. This module holds the error
//! type they share, the provider's error envelope, and the pooled HTTP client
//! construction.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors produced by the provider clients.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Client construction or request assembly failed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure reaching the provider.
    #[error("request failed: {0}")]
    Network(String),

    /// The provider returned a non-success status.
    #[error("provider API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("failed to parse provider response: {0}")]
    Parse(String),

    /// An inbound audio payload could not be decoded.
    #[error("failed to decode audio payload: {0}")]
    Decode(String),

    /// Temporary-file I/O on the transcription path.
    #[error("audio file I/O error: {0}")]
    Io(String),
}

/// Error envelope returned by the provider API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Detail payload inside [`ApiErrorResponse`].
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
}

/// Timeout applied to every provider request. This is the only timeout in
/// the relay: a hung provider call holds its task until this fires.
pub(crate) const PROVIDER_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a pooled HTTP client for provider calls.
pub(crate) fn build_http_client() -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| ProviderError::Configuration(format!("failed to create HTTP client: {e}")))
}

/// Convert a non-success provider response into a [`ProviderError::Api`],
/// preferring the provider's structured error envelope when it parses.
pub(crate) async fn error_from_response(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(parsed) if parsed.error.error_type.is_empty() => parsed.error.message,
        Ok(parsed) => format!("{} ({})", parsed.error.message, parsed.error.error_type),
        Err(_) => body,
    };

    ProviderError::Api { status, message }
}
