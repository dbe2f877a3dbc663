//! Response schema sent with every recipe request.
//!
//! Uses the Gemini schema dialect (upper-case type names). The shape matches
//! [`Recipe`](crate::types::Recipe) and must stay in sync with it.

use serde_json::{json, Value};

/// Keys every recipe object must carry.
pub const REQUIRED_RECIPE_FIELDS: [&str; 7] = [
    "recipeName",
    "description",
    "prepTime",
    "cookTime",
    "servings",
    "ingredients",
    "instructions",
];

/// Keys every ingredient object must carry.
pub const REQUIRED_INGREDIENT_FIELDS: [&str; 3] = ["name", "amount", "provided"];

/// Build the schema for an array of recipes.
pub fn recipe_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "recipeName": { "type": "STRING", "description": "The name of the recipe." },
                "description": { "type": "STRING", "description": "A short, enticing description of the dish." },
                "prepTime": { "type": "STRING", "description": "Preparation time, e.g., '15 minutes'." },
                "cookTime": { "type": "STRING", "description": "Cooking time, e.g., '30 minutes'." },
                "servings": { "type": "STRING", "description": "Number of servings, e.g., '4 servings'." },
                "ingredients": {
                    "type": "ARRAY",
                    "description": "List of all ingredients required for the recipe.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING", "description": "The name of the ingredient." },
                            "amount": { "type": "STRING", "description": "The quantity of the ingredient, e.g., '2 cups' or '1 tbsp'." },
                            "provided": { "type": "BOOLEAN", "description": "Set to true if this ingredient was in the user's provided list, otherwise false." }
                        },
                        "required": REQUIRED_INGREDIENT_FIELDS
                    }
                },
                "instructions": {
                    "type": "ARRAY",
                    "description": "Step-by-step cooking instructions.",
                    "items": { "type": "STRING", "description": "A single step in the cooking instructions." }
                }
            },
            "required": REQUIRED_RECIPE_FIELDS
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_array_of_recipe_objects() {
        let schema = recipe_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
        assert_eq!(
            schema["items"]["required"],
            json!([
                "recipeName",
                "description",
                "prepTime",
                "cookTime",
                "servings",
                "ingredients",
                "instructions"
            ])
        );
    }

    #[test]
    fn test_schema_types_match_recipe_fields() {
        let schema = recipe_schema();
        let properties = &schema["items"]["properties"];
        for field in ["recipeName", "description", "prepTime", "cookTime", "servings"] {
            assert_eq!(properties[field]["type"], "STRING", "field {}", field);
        }
        assert_eq!(properties["instructions"]["items"]["type"], "STRING");

        let ingredient = &properties["ingredients"]["items"];
        assert_eq!(ingredient["properties"]["provided"]["type"], "BOOLEAN");
        assert_eq!(ingredient["required"], json!(["name", "amount", "provided"]));
    }
}
