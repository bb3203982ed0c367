//! Reference store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Reference store is not configured")]
    NotConfigured,

    #[error("Store API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid filter value for column '{column}': {reason}")]
    InvalidFilter { column: String, reason: String },
}
