//! Prompt asking the model for recipes built from the user's ingredients.

use crate::types::GenerationRequest;

/// Prompt name used in logs.
pub const RECIPE_IDEAS_PROMPT_NAME: &str = "recipe_ideas";

/// Number of recipes requested per generation.
pub const RECIPE_COUNT: usize = 3;

/// Render the prompt for a generation request.
///
/// Blank meal type and dietary restrictions become "any" and "none".
pub fn render_recipe_ideas_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are a creative and experienced chef. Your task is to generate {count} unique and delicious recipes.

Available ingredients: {ingredients}.

Desired meal type: {meal_type}.

Dietary restrictions: {dietary_restrictions}.

Please create recipes that primarily use the available ingredients. You can include a few common pantry staples (like salt, pepper, oil, flour) that the user might have. For each ingredient in the recipes, identify whether it was part of the user-provided list and set "provided" accordingly.

Return the response as a JSON array of {count} recipe objects."#,
        count = RECIPE_COUNT,
        ingredients = request.ingredients.trim(),
        meal_type = request.meal_type_or_default(),
        dietary_restrictions = request.dietary_restrictions_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_includes_inputs() {
        let request = GenerationRequest::new("salmon, lemon", "Lunch", "Pescatarian");
        let prompt = render_recipe_ideas_prompt(&request);
        assert!(prompt.contains("Available ingredients: salmon, lemon."));
        assert!(prompt.contains("Desired meal type: Lunch."));
        assert!(prompt.contains("Dietary restrictions: Pescatarian."));
    }

    #[test]
    fn test_render_prompt_uses_defaults_for_blank_fields() {
        let request = GenerationRequest::new("chicken breast, rice", "", "");
        let prompt = render_recipe_ideas_prompt(&request);
        assert!(prompt.contains("Desired meal type: any."));
        assert!(prompt.contains("Dietary restrictions: none."));
    }

    #[test]
    fn test_render_prompt_asks_for_three_recipes_and_pantry_staples() {
        let prompt = render_recipe_ideas_prompt(&GenerationRequest::new("eggs", "", ""));
        assert!(prompt.contains("generate 3 unique"));
        assert!(prompt.contains("JSON array of 3 recipe objects"));
        assert!(prompt.contains("salt, pepper, oil, flour"));
        assert!(prompt.contains("user-provided list"));
    }
}
