//! Fake LLM provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API keys.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// A request received by [`FakeProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct FakeCall {
    pub prompt: String,
    pub schema: serde_json::Value,
}

#[derive(Debug, Clone)]
enum CannedFailure {
    RequestFailed(String),
    Api { status: u16, message: String },
    RateLimited(Option<u64>),
}

impl CannedFailure {
    fn to_error(&self) -> LlmError {
        match self {
            CannedFailure::RequestFailed(message) => LlmError::RequestFailed(message.clone()),
            CannedFailure::Api { status, message } => LlmError::ApiError {
                status: *status,
                message: message.clone(),
            },
            CannedFailure::RateLimited(retry_after_secs) => LlmError::RateLimited {
                retry_after_secs: *retry_after_secs,
            },
        }
    }
}

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered substring,
/// in registration order. If no match is found, returns the default response or an
/// error. A configured failure takes precedence over every response.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// Prompt substring -> response
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    failure: Option<CannedFailure>,
    calls: Mutex<Vec<FakeCall>>,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Create a FakeProvider that answers every prompt with `response`.
    pub fn returning(response: &str) -> Self {
        Self::new().with_default_response(response)
    }

    /// Create a FakeProvider whose calls fail as if the network were down.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(CannedFailure::RequestFailed(message.to_string())),
            ..Self::default()
        }
    }

    /// Create a FakeProvider whose calls fail with an HTTP error from the API.
    pub fn failing_with_status(status: u16, message: &str) -> Self {
        Self {
            failure: Some(CannedFailure::Api {
                status,
                message: message.to_string(),
            }),
            ..Self::default()
        }
    }

    /// Create a FakeProvider whose calls are rate limited.
    pub fn rate_limited(retry_after_secs: Option<u64>) -> Self {
        Self {
            failure: Some(CannedFailure::RateLimited(retry_after_secs)),
            ..Self::default()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider that answers with three small sample recipes.
    pub fn with_sample_recipes() -> Self {
        Self::returning(SAMPLE_RECIPES)
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(FakeCall {
                prompt: prompt.to_string(),
                schema: schema.clone(),
            });

        if let Some(failure) = &self.failure {
            return Err(failure.to_error());
        }

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in &self.responses {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

const SAMPLE_RECIPES: &str = r#"[
  {
    "recipeName": "Garlic Chicken Rice Bowl",
    "description": "Juicy pan-seared chicken over garlicky rice with blistered tomatoes.",
    "prepTime": "10 minutes",
    "cookTime": "25 minutes",
    "servings": "2 servings",
    "ingredients": [
      {"name": "chicken breast", "amount": "2 pieces", "provided": true},
      {"name": "rice", "amount": "1 cup", "provided": true},
      {"name": "garlic", "amount": "3 cloves", "provided": true},
      {"name": "tomatoes", "amount": "2", "provided": true},
      {"name": "olive oil", "amount": "2 tbsp", "provided": false},
      {"name": "salt", "amount": "to taste", "provided": false}
    ],
    "instructions": [
      "Rinse the rice and cook it with one minced garlic clove.",
      "Season the chicken with salt and sear in olive oil until cooked through.",
      "Blister the tomatoes in the same pan with the remaining garlic.",
      "Slice the chicken and serve over the rice with the tomatoes."
    ]
  },
  {
    "recipeName": "Tomato Onion Chicken Stew",
    "description": "A rustic one-pot stew that turns simple ingredients into comfort food.",
    "prepTime": "15 minutes",
    "cookTime": "40 minutes",
    "servings": "4 servings",
    "ingredients": [
      {"name": "chicken breast", "amount": "500 g", "provided": true},
      {"name": "tomatoes", "amount": "4", "provided": true},
      {"name": "onion", "amount": "1 large", "provided": true},
      {"name": "pepper", "amount": "1 tsp", "provided": false}
    ],
    "instructions": [
      "Dice the onion and soften it in a heavy pot.",
      "Add the chicken, chopped tomatoes and pepper, then simmer for 35 minutes."
    ]
  },
  {
    "recipeName": "Crispy Garlic Fried Rice",
    "description": "Leftover-friendly fried rice with plenty of toasted garlic.",
    "prepTime": "5 minutes",
    "cookTime": "15 minutes",
    "servings": "2 servings",
    "ingredients": [
      {"name": "rice", "amount": "2 cups cooked", "provided": true},
      {"name": "garlic", "amount": "5 cloves", "provided": true},
      {"name": "oil", "amount": "3 tbsp", "provided": false}
    ],
    "instructions": [
      "Fry sliced garlic in oil until golden and set aside.",
      "Fry the rice in the garlic oil until crisp and top with the garlic."
    ]
  }
]"#;
