//! Transcription client.
//!
//! Unlike the JSON endpoints, transcription is a multipart upload: the audio
//! travels as a file part alongside the model and language fields. Two call
//! shapes exist - raw bytes for the one-shot HTTP endpoint, and a temporary
//! file handle for the streaming session - and both converge on the same
//! upload path.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use super::config::{AudioInputFormat, TranscriptionConfig};
use crate::core::provider::{ProviderError, build_http_client, error_from_response};

/// Path of the transcription endpoint, relative to the provider base URL.
pub const AUDIO_TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";

/// Response body from the transcription endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

/// Client for the provider's speech-to-text API.
pub struct TranscriptionClient {
    config: TranscriptionConfig,
    /// HTTP client reused across requests (connection pooling).
    http_client: reqwest::Client,
}

impl TranscriptionClient {
    /// Create a new transcription client.
    pub fn new(config: TranscriptionConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            config,
            http_client: build_http_client()?,
        })
    }

    /// Full URL of the transcription endpoint.
    pub fn api_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            AUDIO_TRANSCRIPTIONS_PATH
        )
    }

    /// Transcribe a raw audio payload and return the transcript text.
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        format: AudioInputFormat,
    ) -> Result<String, ProviderError> {
        debug!(bytes = audio.len(), format = format.extension(), "sending audio for transcription");

        let file_part = Part::bytes(audio)
            .file_name(format!("audio.{}", format.extension()))
            .mime_str(format.mime_type())
            .map_err(|e| ProviderError::Configuration(format!("invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.as_str().to_string())
            .text("language", self.config.language.clone());

        let response = self
            .http_client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("transcription request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("transcription response: {e}")))?;

        info!(chars = parsed.text.len(), "transcription complete");
        Ok(parsed.text)
    }

    /// Transcribe the audio stored at `path`.
    ///
    /// Used by the streaming session, which persists the captured chunk to a
    /// temporary file before invoking transcription. The file is read here;
    /// deleting it remains the caller's responsibility.
    pub async fn transcribe_file(
        &self,
        path: &Path,
        format: AudioInputFormat,
    ) -> Result<String, ProviderError> {
        let audio = tokio::fs::read(path)
            .await
            .map_err(|e| ProviderError::Io(format!("failed to read {}: {e}", path.display())))?;

        self.transcribe(audio, format).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> TranscriptionClient {
        TranscriptionClient::new(TranscriptionConfig::new(
            "test_key".to_string(),
            "http://localhost:9000".to_string(),
        ))
        .unwrap()
    }

    #[test]
    fn test_api_url() {
        assert_eq!(
            test_client().api_url(),
            "http://localhost:9000/v1/audio/transcriptions"
        );
    }

    #[tokio::test]
    async fn test_transcribe_file_missing_path_is_io_error() {
        let client = test_client();
        let missing = std::env::temp_dir().join("definitely-not-here.m4a");

        let result = client
            .transcribe_file(&missing, AudioInputFormat::M4a)
            .await;
        assert!(matches!(result, Err(ProviderError::Io(_))));
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"text": "hello there"}"#;
        let parsed: TranscriptionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text, "hello there");
    }
}
