//! Gemini completion provider implementation.

use async_trait::async_trait;
use tracing::debug;

use refrelay_protocols::error::ProviderError;
use refrelay_protocols::provider::{CompletionProvider, CompletionRequest, ProviderKind};

use crate::client::GeminiClient;
use crate::types::*;

pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Gemini completion provider.
///
/// The schema hint is embedded into the prompt as text; no generation
/// parameters are sent.
pub struct GeminiProvider {
    client: GeminiClient,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider against the public endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_client(GeminiClient::new(api_key))
    }

    pub fn with_client(client: GeminiClient) -> Self {
        Self {
            client,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    fn build_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(request.prompt_with_schema())
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
        if let Some(text) = response.text() {
            return Ok(text);
        }
        match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(ProviderError::InvalidResponse(format!(
                "prompt blocked: {}",
                reason
            ))),
            None => Err(ProviderError::EmptyResponse),
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Google
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let model = request.model_or(&self.default_model);
        debug!(
            "Gemini complete: model={}, schema_hint={}",
            model,
            request.has_schema_hint()
        );

        let gemini_request = self.build_request(&request);
        let response = self.client.generate_content(model, &gemini_request).await?;
        Self::extract_text(response)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
