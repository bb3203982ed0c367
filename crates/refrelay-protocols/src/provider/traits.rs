//! Completion provider trait definition.

use async_trait::async_trait;

use super::{CompletionRequest, OutputMode, ProviderKind};
use crate::error::ProviderError;

/// Core trait for LLM providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Which provider this is.
    fn kind(&self) -> ProviderKind;

    /// Model used when the request does not name one.
    fn default_model(&self) -> &str;

    /// How this provider's text is normalized into JSON.
    fn output_mode(&self) -> OutputMode {
        OutputMode::Lenient
    }

    /// Generate a completion and return the raw model text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}
