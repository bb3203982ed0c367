//! LLM invocation handler.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use refrelay_protocols::CompletionRequest;
use refrelay_protocols::provider::missing_required_fields;

use crate::error::ApiError;
use crate::state::AppContext;

pub const INVOKE_FAILED: &str = "Failed to invoke LLM";

/// Body of `POST /api/llm/invoke`.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub prompt: Option<String>,

    /// Advisory schema for the model output.
    #[serde(default)]
    pub response_json_schema: Option<Value>,

    /// `"google"` or `"openai"`; defaults to the context's default provider.
    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub model: Option<String>,
}

/// Forward a prompt to the selected provider and return its output as JSON.
pub async fn invoke(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<InvokeRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;

    let prompt = body
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::validation("Prompt is required"))?;
    let provider = ctx.resolve_provider(body.provider.as_deref())?;

    let request = CompletionRequest::new(prompt)
        .with_schema_hint(body.response_json_schema)
        .with_model(body.model);
    info!(
        "Invoking {} (model: {}, schema: {})",
        provider.kind(),
        request.model_or(provider.default_model()),
        request.has_schema_hint()
    );

    let schema = request.schema_hint.clone();
    let text = provider
        .complete(request)
        .await
        .map_err(|e| ApiError::upstream(INVOKE_FAILED, e))?;
    let result = provider
        .output_mode()
        .normalize(&text)
        .map_err(|e| ApiError::upstream(INVOKE_FAILED, e))?;

    if let Some(schema) = schema {
        let missing = missing_required_fields(&schema, &result);
        if !missing.is_empty() {
            warn!(
                "{} response is missing required fields: {}",
                provider.kind(),
                missing.join(", ")
            );
        }
    }

    Ok(Json(result))
}

#[cfg(test)]
#[path = "llm_tests.rs"]
mod tests;
