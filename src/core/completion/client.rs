//! Chat completion client.
//!
//! Calls the provider's chat completions endpoint with fixed sampling
//! parameters and waits for the full, non-streamed reply. There is no retry:
//! a failure is reported to the caller and the request is over.

use tracing::{debug, info};

use super::messages::{ChatMessage, CompletionRequestBody, CompletionResponseBody};
use crate::core::provider::{ProviderError, build_http_client, error_from_response};

/// Path of the chat completions endpoint, relative to the provider base URL.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Model used for every completion.
pub const COMPLETION_MODEL: &str = "gpt-4";

/// Fixed sampling temperature.
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Bound on the reply length, in tokens.
pub const COMPLETION_MAX_TOKENS: u32 = 500;

/// Configuration for the completion client.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Provider API key.
    pub api_key: String,
    /// Provider base URL (no trailing slash required).
    pub base_url: String,
}

impl CompletionConfig {
    /// Full URL of the chat completions endpoint.
    pub fn api_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }
}

/// Client for the provider's chat completion API.
pub struct CompletionClient {
    config: CompletionConfig,
    /// HTTP client reused across requests (connection pooling).
    http_client: reqwest::Client,
}

impl CompletionClient {
    /// Create a new completion client.
    pub fn new(config: CompletionConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            config,
            http_client: build_http_client()?,
        })
    }

    /// Send the assembled prompt and return the assistant's reply text.
    ///
    /// Waits for the complete response; nothing is streamed back to the
    /// caller. An empty reply from the provider is passed through as-is.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let body = CompletionRequestBody {
            model: COMPLETION_MODEL,
            messages,
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        };

        debug!(turns = messages.len(), "requesting chat completion");

        let response = self
            .http_client
            .post(self.config.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("completion request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let parsed: CompletionResponseBody = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("completion response: {e}")))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        info!(chars = text.len(), "completion received");
        Ok(text)
    }
}
