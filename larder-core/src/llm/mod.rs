//! LLM provider abstraction for structured recipe generation.
//!
//! A provider takes a prompt plus a response schema and returns the model's raw
//! text. Parsing and validating that text is the job of [`crate::ai`], so
//! providers can be swapped for [`FakeProvider`] in tests.

mod fake;
mod gemini;

pub use fake::{FakeCall, FakeProvider};
pub use gemini::{GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations make exactly one outbound request per call and never retry.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and a response schema, returning the model's raw text.
    async fn generate(&self, prompt: &str, schema: &serde_json::Value)
        -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}
