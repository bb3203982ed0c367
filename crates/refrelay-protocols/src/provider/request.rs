//! Completion request types.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};

/// Instruction appended to the prompt when a schema hint is embedded as text.
pub const SCHEMA_INSTRUCTION: &str = "Please respond with valid JSON that matches this schema: ";

/// Request for a completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Caller prompt, unmodified.
    pub prompt: String,

    /// Advisory JSON schema for the model output. Never validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_hint: Option<Value>,

    /// Model override; providers fall back to their configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl CompletionRequest {
    /// Create a new completion request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            schema_hint: None,
            model: None,
        }
    }

    /// Attach a schema hint. Blank values (see [`is_blank`]) mean no hint.
    pub fn with_schema_hint(mut self, schema: Option<Value>) -> Self {
        self.schema_hint = schema.filter(|s| !is_blank(s));
        self
    }

    /// Override the model.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model.filter(|m| !m.is_empty());
        self
    }

    pub fn has_schema_hint(&self) -> bool {
        self.schema_hint.is_some()
    }

    /// The prompt with the schema hint embedded as text, if there is one.
    pub fn prompt_with_schema(&self) -> String {
        match &self.schema_hint {
            Some(schema) => format!(
                "{}\n\n{}{}",
                self.prompt,
                SCHEMA_INSTRUCTION,
                to_spaced_json(schema)
            ),
            None => self.prompt.clone(),
        }
    }

    /// Resolve the model to use against a provider default.
    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(default)
    }
}

/// Whether a caller-supplied value counts as absent.
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` are blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Single-line JSON with a space after each `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn to_spaced_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
