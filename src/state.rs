//! Shared application state.
//!
//! One [`AppState`] is built at startup and shared read-only across every
//! request handler and streaming connection. The relay keeps no other
//! process-wide state: per-connection buffers live with their connection
//! tasks.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::{
    CompletionClient, CompletionConfig, ProviderError, SpeechClient, SpeechConfig,
    TranscriptionClient, TranscriptionConfig,
};

/// Application state containing the configuration and the provider clients.
pub struct AppState {
    pub config: ServerConfig,
    pub completion: CompletionClient,
    pub speech: SpeechClient,
    pub transcription: TranscriptionClient,
}

impl AppState {
    /// Build the provider clients from the server configuration.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, ProviderError> {
        let completion = CompletionClient::new(CompletionConfig {
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
        })?;

        let speech = SpeechClient::new(SpeechConfig::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        ))?;

        let transcription = TranscriptionClient::new(TranscriptionConfig::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        ))?;

        Ok(Arc::new(Self {
            config,
            completion,
            speech,
            transcription,
        }))
    }
}
