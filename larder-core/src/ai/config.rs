//! AI configuration from environment variables.

use std::env;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::llm::{
    FakeProvider, GeminiProvider, LlmError, LlmProvider, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Which provider backs recipe generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    /// Canned sample recipes, no network access.
    Fake,
}

/// AI client configuration.
#[derive(Clone)]
pub struct AiConfig {
    pub provider: ProviderKind,
    /// API key from the environment. May be absent until the user enters one.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `LARDER_AI_PROVIDER`: "gemini" or "fake" (default: "gemini")
    /// - `GEMINI_API_KEY`: API key for Gemini
    /// - `LARDER_AI_MODEL`: Model name (default: "gemini-2.5-flash")
    /// - `LARDER_AI_BASE_URL`: API base URL (default: the public Gemini endpoint)
    /// - `LARDER_AI_TIMEOUT_SECS`: Request timeout (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("LARDER_AI_PROVIDER").as_deref() {
            None | Some("") | Some("gemini") => ProviderKind::Gemini,
            Some("fake") => ProviderKind::Fake,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "LARDER_AI_PROVIDER".to_string(),
                    value: other.to_string(),
                })
            }
        };

        let api_key = lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty());

        let model = lookup("LARDER_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url =
            lookup("LARDER_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("LARDER_AI_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    name: "LARDER_AI_TIMEOUT_SECS".to_string(),
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
            timeout,
        })
    }

    /// Whether a provider can be built with the given user-entered key.
    pub fn has_credential(&self, api_key_override: Option<&str>) -> bool {
        match self.provider {
            ProviderKind::Fake => true,
            ProviderKind::Gemini => self.resolve_key(api_key_override).is_some(),
        }
    }

    /// Build the configured provider.
    ///
    /// A non-blank `api_key_override` takes precedence over `GEMINI_API_KEY`.
    pub fn build_provider(
        &self,
        api_key_override: Option<&str>,
    ) -> Result<Arc<dyn LlmProvider>, LlmError> {
        match self.provider {
            ProviderKind::Fake => Ok(Arc::new(FakeProvider::with_sample_recipes())),
            ProviderKind::Gemini => {
                let api_key = self.resolve_key(api_key_override).ok_or_else(|| {
                    LlmError::NotConfigured("no Gemini API key provided".to_string())
                })?;

                let client = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

                Ok(Arc::new(
                    GeminiProvider::with_client(api_key, &self.model, client)
                        .with_base_url(&self.base_url),
                ))
            }
        }
    }

    fn resolve_key<'a>(&'a self, api_key_override: Option<&'a str>) -> Option<&'a str> {
        api_key_override
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .or(self.api_key.as_deref())
    }
}
