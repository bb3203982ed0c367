//! OpenAI provider implementation.

use async_trait::async_trait;
use tracing::debug;

use refrelay_protocols::error::ProviderError;
use refrelay_protocols::provider::{
    CompletionProvider, CompletionRequest, OutputMode, ProviderKind,
};

use crate::api::{ApiErrorResponse, ApiMessage, ApiRequest, ApiResponse, ResponseFormat};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// OpenAI chat-completions provider.
///
/// A schema hint only switches on JSON response mode; the schema itself is
/// not sent. Output is parsed strictly.
pub struct OpenAIProvider {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
    default_model: String,
}

impl OpenAIProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Create provider with custom API URL (for OpenAI-compatible APIs).
    pub fn with_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            client: reqwest::Client::new(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Share a preconfigured HTTP client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    fn build_request(&self, request: &CompletionRequest) -> ApiRequest {
        ApiRequest {
            model: request.model_or(&self.default_model).to_string(),
            messages: vec![ApiMessage::user(request.prompt.clone())],
            max_tokens: Some(MAX_TOKENS),
            temperature: Some(TEMPERATURE),
            response_format: request
                .has_schema_hint()
                .then(ResponseFormat::json_object),
        }
    }

    async fn send_request(&self, api_request: &ApiRequest) -> Result<ApiResponse, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ProviderError::from_api_response(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn output_mode(&self) -> OutputMode {
        OutputMode::Strict
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let api_request = self.build_request(&request);
        debug!(
            "OpenAI complete: model={}, json_mode={}",
            api_request.model,
            api_request.response_format.is_some()
        );

        let api_response = self.send_request(&api_request).await?;
        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
