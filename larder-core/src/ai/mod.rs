//! Recipe generation on top of an [`LlmProvider`](crate::llm::LlmProvider).
//!
//! This module provides:
//! - `AiConfig` for choosing and building a provider from environment variables
//! - The recipe prompt and the response schema sent with it
//! - `generate_recipes`, which turns the provider's raw text into validated recipes
//!
//! # Configuration
//!
//! - `LARDER_AI_PROVIDER` (optional): "gemini" (default) or "fake"
//! - `GEMINI_API_KEY` (optional): API key; can also be entered in the web UI
//! - `LARDER_AI_MODEL` (optional): Model name, e.g., "gemini-2.5-flash"
//! - `LARDER_AI_BASE_URL` (optional): API base URL
//! - `LARDER_AI_TIMEOUT_SECS` (optional): Request timeout in seconds

mod config;
mod generate;
pub mod prompts;
pub mod schema;

pub use config::{AiConfig, ConfigError, ProviderKind};
pub use generate::{generate_recipes, parse_recipes};
pub use schema::recipe_schema;
