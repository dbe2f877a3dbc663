//! Recipe generation: one provider call, then strict parsing of the result.

use tracing::{debug, error, info};

use crate::ai::prompts::recipe_ideas::{render_recipe_ideas_prompt, RECIPE_IDEAS_PROMPT_NAME};
use crate::ai::schema::recipe_schema;
use crate::error::GenerationError;
use crate::llm::LlmProvider;
use crate::types::{GenerationRequest, Recipe};

/// Generate recipes for `request` using `provider`.
///
/// Makes exactly one call to the provider. The caller is expected to have
/// validated that the ingredient list is not empty.
pub async fn generate_recipes(
    provider: &dyn LlmProvider,
    request: &GenerationRequest,
) -> Result<Vec<Recipe>, GenerationError> {
    let prompt = render_recipe_ideas_prompt(request);
    let schema = recipe_schema();

    debug!(
        prompt_name = RECIPE_IDEAS_PROMPT_NAME,
        provider = provider.provider_name(),
        model = provider.model_name(),
        "Requesting recipes"
    );

    let text = provider.generate(&prompt, &schema).await.map_err(|e| {
        error!(error = %e, "Error generating recipes");
        GenerationError::from(e)
    })?;

    let recipes = parse_recipes(&text).inspect_err(|e| {
        error!(error = %e, response_len = text.len(), "Error generating recipes");
    })?;

    info!(count = recipes.len(), "Generated recipes");
    Ok(recipes)
}

/// Parse the provider's raw text into recipes.
///
/// The text must be a JSON array of complete recipe objects. Missing fields are
/// an error; they are never filled with defaults.
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, GenerationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    serde_json::from_str(text).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
}
