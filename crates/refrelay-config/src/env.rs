//! Environment variable overlay.
//!
//! Recognized variables: `HOST`, `PORT`, `FRONTEND_URL`, `APP_ENV`,
//! `GEMINI_API_KEY`, `OPENAI_API_KEY`, `SUPABASE_URL`, `SUPABASE_KEY`.
//! Empty values are treated as unset.

use crate::error::ConfigError;
use crate::schema::{Config, Environment};

/// Applies environment variables on top of a loaded [`Config`].
pub struct EnvOverrides<F> {
    lookup: F,
}

impl EnvOverrides<fn(&str) -> Option<String>> {
    /// Overrides read from the process environment.
    pub fn from_process() -> Self {
        Self {
            lookup: |key| std::env::var(key).ok(),
        }
    }
}

impl<F> EnvOverrides<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Overrides read through an arbitrary lookup function.
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    /// Overlay every recognized variable that is set.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(host) = self.get("HOST") {
            config.server.host = host;
        }
        if let Some(port) = self.get("PORT") {
            config.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "PORT".to_string(),
                    message: e.to_string(),
                })?;
        }
        if let Some(url) = self.get("FRONTEND_URL") {
            config.server.frontend_url = url;
        }
        if let Some(env) = self.get("APP_ENV") {
            config.server.environment = Environment::from_name(&env);
        }
        if let Some(key) = self.get("GEMINI_API_KEY") {
            config.providers.gemini.api_key = Some(key);
        }
        if let Some(key) = self.get("OPENAI_API_KEY") {
            config.providers.openai.api_key = Some(key);
        }
        if let Some(url) = self.get("SUPABASE_URL") {
            config.store.url = Some(url);
        }
        if let Some(key) = self.get("SUPABASE_KEY") {
            config.store.key = Some(key);
        }
        Ok(())
    }
}
