//! HTTP error mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Boxed cause of an upstream failure.
pub type UpstreamCause = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced to HTTP callers as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request body. The message is returned to the caller.
    #[error("{0}")]
    Validation(String),

    /// Unknown provider name, or a provider without credentials.
    #[error("Provider {0} not available")]
    ProviderUnavailable(String),

    /// Provider or store failure. Only `context` reaches the caller.
    #[error("{context}")]
    Upstream {
        context: &'static str,
        #[source]
        source: UpstreamCause,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(context: &'static str, source: impl Into<UpstreamCause>) -> Self {
        Self::Upstream {
            context,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::ProviderUnavailable(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream { context, source } = &self {
            error!("{}: {}", context, source);
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
