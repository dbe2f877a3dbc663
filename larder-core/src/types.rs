use serde::{Deserialize, Serialize};

/// Meal type used in the prompt when the user leaves the field blank.
pub const DEFAULT_MEAL_TYPE: &str = "any";

/// Dietary restrictions used in the prompt when the user leaves the field blank.
pub const DEFAULT_DIETARY_RESTRICTIONS: &str = "none";

/// A single ingredient line of a generated recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    /// True if the ingredient came from the user's list rather than the pantry.
    pub provided: bool,
}

/// A recipe as returned by the generation service.
///
/// Field names follow the wire format (`recipeName`, `prepTime`, ...). Every
/// field is required; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

/// Input to a single recipe generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    /// Comma-separated free text.
    pub ingredients: String,
    pub meal_type: String,
    pub dietary_restrictions: String,
}

impl GenerationRequest {
    pub fn new(
        ingredients: impl Into<String>,
        meal_type: impl Into<String>,
        dietary_restrictions: impl Into<String>,
    ) -> Self {
        Self {
            ingredients: ingredients.into(),
            meal_type: meal_type.into(),
            dietary_restrictions: dietary_restrictions.into(),
        }
    }

    pub fn meal_type_or_default(&self) -> &str {
        non_blank_or(&self.meal_type, DEFAULT_MEAL_TYPE)
    }

    pub fn dietary_restrictions_or_default(&self) -> &str {
        non_blank_or(&self.dietary_restrictions, DEFAULT_DIETARY_RESTRICTIONS)
    }
}

fn non_blank_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}
