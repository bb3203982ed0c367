//! Normalization of model text into a JSON result.

use serde_json::{Value, json};

use crate::error::ProviderError;

/// How a provider's raw text is turned into the relay's JSON result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Parse as JSON; fall back to `{"response": text}` when parsing fails.
    #[default]
    Lenient,
    /// Parse as JSON; a parse failure is an error.
    Strict,
}

impl OutputMode {
    /// Convert raw model text into the JSON value returned to callers.
    pub fn normalize(self, text: &str) -> Result<Value, ProviderError> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Ok(value),
            Err(e) => match self {
                OutputMode::Lenient => Ok(json!({ "response": text })),
                OutputMode::Strict => Err(ProviderError::InvalidOutput(e.to_string())),
            },
        }
    }
}

/// Keys listed in a schema's `required` array that are absent from `value`.
///
/// Non-object values and schemas without `required` yield no missing keys.
pub fn missing_required_fields(schema: &Value, value: &Value) -> Vec<String> {
    let Some(object) = value.as_object() else {
        return Vec::new();
    };
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|required| {
            required
                .iter()
                .filter_map(Value::as_str)
                .filter(|key| !object.contains_key(*key))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
