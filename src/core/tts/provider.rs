//! Speech synthesis client.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base}/v1/audio/speech`
//! - Output: complete audio payload in the configured container
//!
//! The relay waits for the entire audio body before responding to the
//! client; nothing is streamed.

use serde_json::json;
use tracing::{debug, info};

use super::config::SpeechConfig;
use crate::core::provider::{ProviderError, build_http_client, error_from_response};

/// Path of the speech synthesis endpoint, relative to the provider base URL.
pub const AUDIO_SPEECH_PATH: &str = "/v1/audio/speech";

/// Client for the provider's speech synthesis API.
pub struct SpeechClient {
    config: SpeechConfig,
    /// HTTP client reused across requests (connection pooling).
    http_client: reqwest::Client,
}

impl SpeechClient {
    /// Create a new speech synthesis client.
    pub fn new(config: SpeechConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            config,
            http_client: build_http_client()?,
        })
    }

    /// Full URL of the speech endpoint.
    pub fn api_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            AUDIO_SPEECH_PATH
        )
    }

    /// Synthesize `text` and return the complete audio payload.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let mut body = json!({
            "model": self.config.model.as_str(),
            "input": text,
            "voice": self.config.voice.as_str(),
            "response_format": self.config.response_format.as_str(),
        });

        // Add speed if not default (1.0)
        let speed = self.config.clamped_speed();
        if (speed - 1.0).abs() > 0.001 {
            body["speed"] = json!(speed);
        }

        debug!(chars = text.len(), voice = %self.config.voice.as_str(), "requesting speech synthesis");

        let response = self
            .http_client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("speech request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Network(format!("failed to read audio body: {e}")))?;

        info!(bytes = audio.len(), "speech synthesis complete");
        Ok(audio.to_vec())
    }
}
