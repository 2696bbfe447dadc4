//! Provider router — selects the inference provider based on config.
//!
//! A provider is only registered when it has the credentials it needs. When
//! the default provider cannot be built, callers get `None` and run in
//! template-only mode.

use std::collections::HashMap;
use std::sync::Arc;

use postcraft_config::{AppConfig, ProviderConfig};
use postcraft_core::provider::Provider;
use tracing::{debug, info};

use crate::openai_compat::OpenAiCompatProvider;
use crate::workers_ai::WorkersAiProvider;

/// Routes inference requests to the correct provider.
pub struct ProviderRouter {
    providers: HashMap<String, Arc<dyn Provider>>,
    default_provider: String,
}

impl ProviderRouter {
    /// Create a new router with a default provider.
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get the default provider.
    pub fn default(&self) -> Option<Arc<dyn Provider>> {
        self.providers.get(&self.default_provider).cloned()
    }

    /// Get a specific provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(name).cloned()
    }
}

/// Build providers from configuration.
pub fn build_from_config(config: &AppConfig) -> ProviderRouter {
    let mut router = ProviderRouter::new(&config.default_provider);

    for (name, provider_config) in &config.providers {
        if let Some(provider) = build_provider(name, provider_config, config) {
            router.register(name.clone(), provider);
        }
    }

    // The default provider may rely purely on top-level settings.
    if router.get(&config.default_provider).is_none() {
        let fallback = ProviderConfig::default();
        if let Some(provider) = build_provider(&config.default_provider, &fallback, config) {
            router.register(config.default_provider.clone(), provider);
        }
    }

    router
}

/// The provider the generator should use, or `None` for template-only mode.
pub fn inference_provider(config: &AppConfig) -> Option<Arc<dyn Provider>> {
    if !config.generation.use_ai {
        info!("AI generation disabled in config, using templates only");
        return None;
    }

    let provider = build_from_config(config).default();
    if provider.is_none() {
        info!(
            provider = %config.default_provider,
            "No credentials for inference provider, using templates only"
        );
    }
    provider
}

fn build_provider(
    name: &str,
    provider_config: &ProviderConfig,
    config: &AppConfig,
) -> Option<Arc<dyn Provider>> {
    let api_key = provider_config
        .api_key
        .clone()
        .or_else(|| config.api_key.clone());

    match name {
        "workers_ai" => {
            let account_id = provider_config
                .account_id
                .clone()
                .or_else(|| config.account_id.clone());
            let (Some(account_id), Some(api_key)) = (account_id, api_key) else {
                debug!("workers_ai skipped: account ID or API token missing");
                return None;
            };
            let mut provider = WorkersAiProvider::new(account_id, api_key);
            if let Some(url) = &provider_config.api_url {
                provider = provider.with_base_url(url);
            }
            Some(Arc::new(provider))
        }
        "ollama" => Some(Arc::new(OpenAiCompatProvider::ollama(
            provider_config.api_url.as_deref(),
        ))),
        _ => {
            let Some(api_key) = api_key else {
                debug!(provider = name, "Provider skipped: no API key");
                return None;
            };
            let base_url = provider_config
                .api_url
                .clone()
                .unwrap_or_else(|| default_base_url(name));
            Some(Arc::new(OpenAiCompatProvider::new(name, base_url, api_key)))
        }
    }
}

/// Get the default base URL for well-known OpenAI-compatible providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "openai" => "https://api.openai.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}
