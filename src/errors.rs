//! Application error taxonomy
//!
//! Every handler returns [`AppError`] at its boundary. Client input problems
//! map to 400 responses with the exact message the mobile client matches on;
//! any downstream provider, network, or decoding failure maps to a 500 with a
//! generic body while the underlying cause is logged server-side. No
//! structured error codes are exposed beyond the message string.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::core::ProviderError;

/// Convenience alias for handler results.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced at the HTTP handler boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unrecognized conversation mode in a chat request.
    #[error("Invalid session type")]
    InvalidMode,

    /// A required request field was absent or empty. The payload is the
    /// client-facing message naming the field.
    #[error("{0}")]
    MissingInput(&'static str),

    /// A downstream provider call failed. `public` is the generic message
    /// returned to the client; the source carries the real cause for the log.
    #[error("{public}")]
    Upstream {
        public: &'static str,
        #[source]
        source: ProviderError,
    },
}

impl AppError {
    /// Wrap a provider failure with the generic message for this endpoint.
    pub fn upstream(public: &'static str, source: ProviderError) -> Self {
        Self::Upstream { public, source }
    }
}

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidMode | AppError::MissingInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { source, .. } => {
                tracing::error!(error = %source, "upstream provider failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
