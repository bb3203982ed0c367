//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, ProviderConfig};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse errors into a single [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }
        let message = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Invalid(message))
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_providers(config, &mut result);
        Self::validate_store(config, &mut result);
        Self::validate_upstream(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if !is_http_url(&config.server.frontend_url) {
            result.add_error(ValidationError::new(
                "server.frontend_url",
                "frontend_url must start with http:// or https://",
            ));
        }
    }

    fn validate_providers(config: &Config, result: &mut ValidationResult) {
        let providers: [(&str, &ProviderConfig); 2] = [
            ("gemini", &config.providers.gemini),
            ("openai", &config.providers.openai),
        ];

        for (name, provider) in providers {
            if let Some(ref url) = provider.base_url {
                if !is_http_url(url) {
                    result.add_error(ValidationError::new(
                        format!("providers.{}.base_url", name),
                        "base_url must start with http:// or https://",
                    ));
                }
            }

            if matches!(provider.default_model.as_deref(), Some("")) {
                result.add_error(ValidationError::new(
                    format!("providers.{}.default_model", name),
                    "default_model cannot be empty",
                ));
            }
        }

        if providers.iter().all(|(_, p)| !p.is_enabled()) {
            result.add_warning(ValidationWarning::new(
                "providers",
                "No LLM provider has an API key; /api/llm/invoke will reject every request",
            ));
        }
    }

    fn validate_store(config: &Config, result: &mut ValidationResult) {
        if let Some(ref url) = config.store.url {
            if !url.is_empty() && !is_http_url(url) {
                result.add_error(ValidationError::new(
                    "store.url",
                    "url must start with http:// or https://",
                ));
            }
        }

        if config.store.table.is_empty() {
            result.add_error(ValidationError::new("store.table", "Table name cannot be empty"));
        }

        if config.store.credentials().is_none() {
            result.add_warning(ValidationWarning::new(
                "store",
                "SUPABASE_URL/SUPABASE_KEY not set; reference endpoints will fail",
            ));
        }
    }

    fn validate_upstream(config: &Config, result: &mut ValidationResult) {
        if config.upstream.connect_timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "upstream.connect_timeout_seconds",
                "connect_timeout_seconds must be greater than 0",
            ));
        }

        if config.upstream.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "upstream.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
