//! Configuration module for the Solace Relay server
//!
//! Configuration is read once at process startup from environment variables,
//! with `.env` support provided by `dotenvy` in `main`. There is no runtime
//! reconfiguration: the resulting [`ServerConfig`] is immutable for the
//! lifetime of the process.
//!
//! # Example
//! ```rust,no_run
//! use solace_relay::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::env;

use thiserror::Error;
use zeroize::Zeroize;

/// Default listen host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default base URL of the OpenAI-compatible provider.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The provider API key is absent; the relay cannot do anything without it.
    #[error("OPENAI_API_KEY environment variable must be set")]
    MissingApiKey,

    /// A numeric environment variable failed to parse.
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration
///
/// Contains everything needed to run the relay:
/// - Listen address (host, port)
/// - Provider credentials and base URL
/// - CORS policy
/// - Streaming session behavior
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    /// API key for the completion, speech synthesis, and transcription
    /// services (a single OpenAI-compatible provider backs all three).
    pub openai_api_key: String,

    /// Base URL of the provider. Overridable so tests can point the relay
    /// at a mock backend.
    pub openai_base_url: String,

    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,

    /// When true, ending a streaming session transcribes the concatenation
    /// of every buffered chunk. When false, only the most recently received
    /// chunk is transcribed, matching the behavior of the mobile client's
    /// original backend.
    pub stream_concat_chunks: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; everything else falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .filter(|origins| !origins.trim().is_empty());

        let stream_concat_chunks = env::var("STREAM_CONCAT_CHUNKS")
            .map(|value| parse_bool(&value))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            openai_api_key,
            openai_base_url,
            cors_allowed_origins,
            stream_concat_chunks,
        })
    }

    /// The socket address string the server binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Implement Drop to zeroize the provider credential when ServerConfig is
/// dropped, clearing sensitive data from memory after use.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        self.openai_api_key.zeroize();
    }
}

/// Accepted truthy spellings: "1", "true", "yes", "on" (case-insensitive).
fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
