//! Application context shared by every handler.

use std::collections::HashMap;
use std::sync::Arc;

use refrelay_protocols::{CompletionProvider, ProviderKind, ReferenceStore};

use crate::error::ApiError;

/// Providers initialized at startup, keyed by kind.
#[derive(Default, Clone)]
pub struct ProviderSet {
    providers: HashMap<ProviderKind, Arc<dyn CompletionProvider>>,
}

impl ProviderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own kind, replacing any previous one.
    pub fn register(&mut self, provider: Arc<dyn CompletionProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    pub fn with(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.register(provider);
        self
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn CompletionProvider>> {
        self.providers.get(&kind).cloned()
    }

    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.providers.contains_key(&kind)
    }

    /// Registered kinds in preference order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Immutable process-wide state.
pub struct AppContext {
    providers: ProviderSet,
    store: Option<Arc<dyn ReferenceStore>>,
    default_provider: ProviderKind,
}

impl AppContext {
    /// The default provider is Google when it was configured, else OpenAI.
    pub fn new(providers: ProviderSet) -> Self {
        let default_provider = if providers.contains(ProviderKind::Google) {
            ProviderKind::Google
        } else {
            ProviderKind::OpenAi
        };
        Self {
            providers,
            store: None,
            default_provider,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn ReferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn default_provider(&self) -> ProviderKind {
        self.default_provider
    }

    pub fn providers(&self) -> &ProviderSet {
        &self.providers
    }

    pub fn store(&self) -> Option<&Arc<dyn ReferenceStore>> {
        self.store.as_ref()
    }

    /// Look up a provider by wire name.
    ///
    /// `None` selects the default. Unknown names and kinds without
    /// credentials are both reported as unavailable.
    pub fn resolve_provider(
        &self,
        name: Option<&str>,
    ) -> Result<Arc<dyn CompletionProvider>, ApiError> {
        let kind = match name {
            Some(name) => name
                .parse::<ProviderKind>()
                .map_err(|_| ApiError::ProviderUnavailable(name.to_string()))?,
            None => self.default_provider,
        };
        self.providers
            .get(kind)
            .ok_or_else(|| ApiError::ProviderUnavailable(kind.to_string()))
    }
}
