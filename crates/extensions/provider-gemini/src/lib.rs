//! # refrelay Provider - Gemini
//!
//! Google Gemini provider for refrelay.

mod client;
mod provider;
mod types;

pub use client::{BASE_URL, GeminiClient};
pub use provider::{DEFAULT_MODEL, GeminiProvider};
pub use types::*;
