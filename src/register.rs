//! Provider and store registration from configuration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use refrelay_api::ProviderSet;
use refrelay_config::Config;
use refrelay_protocols::ReferenceStore;
use refrelay_provider_gemini::{BASE_URL as GEMINI_BASE_URL, GeminiClient, GeminiProvider};
use refrelay_provider_openai::OpenAIProvider;
use refrelay_store_supabase::SupabaseStore;

/// Shared outbound client with configured timeouts.
pub(crate) fn build_http_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.upstream.connect_timeout_seconds))
        .timeout(Duration::from_secs(config.upstream.timeout_seconds))
        .build()
}

/// Initialize each provider that has an API key.
pub(crate) fn register_providers(config: &Config, http: &reqwest::Client) -> ProviderSet {
    let mut providers = ProviderSet::new();

    let gemini = &config.providers.gemini;
    match gemini.api_key() {
        Some(api_key) => {
            let base_url = gemini.base_url.clone().unwrap_or_else(|| GEMINI_BASE_URL.to_string());
            let client = GeminiClient::with_client(http.clone(), api_key.to_string(), base_url);
            let mut provider = GeminiProvider::with_client(client);
            if let Some(model) = &gemini.default_model {
                provider = provider.with_default_model(model.clone());
            }
            providers.register(Arc::new(provider));
            info!("Registered Gemini provider");
        }
        None => info!("Skipping provider 'google': GEMINI_API_KEY not set"),
    }

    let openai = &config.providers.openai;
    match openai.api_key() {
        Some(api_key) => {
            // base_url is the full chat-completions endpoint for OpenAI-compatible APIs.
            let mut provider = match &openai.base_url {
                Some(base_url) => OpenAIProvider::with_url(api_key.to_string(), base_url.clone()),
                None => OpenAIProvider::new(api_key.to_string()),
            }
            .with_http_client(http.clone());
            if let Some(model) = &openai.default_model {
                provider = provider.with_default_model(model.clone());
            }
            providers.register(Arc::new(provider));
            info!("Registered OpenAI provider");
        }
        None => info!("Skipping provider 'openai': OPENAI_API_KEY not set"),
    }

    if providers.is_empty() {
        warn!("No LLM provider configured; /api/llm/invoke will answer 400");
    }
    providers
}

/// Build the reference store when both URL and key are configured.
pub(crate) fn register_store(
    config: &Config,
    http: &reqwest::Client,
) -> Option<Arc<dyn ReferenceStore>> {
    let Some((url, key)) = config.store.credentials() else {
        warn!("Reference store not configured; reference endpoints will answer 500");
        return None;
    };
    let store = SupabaseStore::new(url, key)
        .with_table(config.store.table.clone())
        .with_http_client(http.clone());
    info!("Reference store: {}", store.table_url());
    Some(Arc::new(store))
}
