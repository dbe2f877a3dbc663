//! The ingredient form and its submit-time validation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::GenerationRequest;

/// Editable fields of the ingredient form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeForm {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub dietary_restrictions: String,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            ingredients: "chicken breast, tomatoes, onion, garlic, rice".to_string(),
            meal_type: "Dinner".to_string(),
            dietary_restrictions: String::new(),
        }
    }
}

impl RecipeForm {
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

    /// Check the form and turn it into a generation request.
    ///
    /// Only the ingredient list is required. Blank optional fields are passed
    /// through as-is; defaults are applied when the prompt is rendered.
    pub fn validate(&self) -> Result<GenerationRequest, ValidationError> {
        let ingredients = self.ingredients.trim();
        if ingredients.is_empty() {
            return Err(ValidationError::EmptyIngredients);
        }

        Ok(GenerationRequest::new(
            ingredients,
            self.meal_type.clone(),
            self.dietary_restrictions.clone(),
        ))
    }
}
