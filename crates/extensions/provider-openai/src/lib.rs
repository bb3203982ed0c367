//! OpenAI completion provider for refrelay.

mod api;
mod provider;

pub use provider::{DEFAULT_API_URL, DEFAULT_MODEL, OpenAIProvider};
