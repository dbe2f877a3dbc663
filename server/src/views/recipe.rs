use larder_core::Recipe;
use maud::{html, Markup};

pub fn recipe_card(recipe: &Recipe) -> Markup {
    html! {
        article.recipe-card {
            h3 { (recipe.recipe_name) }
            p { (recipe.description) }
            div.pills {
                span { "Prep: " (recipe.prep_time) }
                span { "Cook: " (recipe.cook_time) }
                span { (recipe.servings) }
            }
            h4 { "Ingredients" }
            ul.ingredients {
                @for ingredient in &recipe.ingredients {
                    li class=(if ingredient.provided { "provided" } else { "pantry" }) {
                        strong { (ingredient.amount) }
                        " " (ingredient.name)
                        @if ingredient.provided {
                            " " em { "(You have this)" }
                        }
                    }
                }
            }
            h4 { "Instructions" }
            ol.instructions {
                @for step in &recipe.instructions {
                    li { (step) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::Ingredient;

    fn recipe(ingredients: Vec<Ingredient>, instructions: Vec<String>) -> Recipe {
        Recipe {
            recipe_name: "Shakshuka".to_string(),
            description: "Eggs poached in spiced tomato sauce.".to_string(),
            prep_time: "10 minutes".to_string(),
            cook_time: "20 minutes".to_string(),
            servings: "4 servings".to_string(),
            ingredients,
            instructions,
        }
    }

    #[test]
    fn test_card_renders_fields() {
        let html = recipe_card(&recipe(
            vec![
                Ingredient {
                    name: "eggs".to_string(),
                    amount: "4".to_string(),
                    provided: true,
                },
                Ingredient {
                    name: "cumin".to_string(),
                    amount: "1 tsp".to_string(),
                    provided: false,
                },
            ],
            vec!["Simmer the sauce.".to_string(), "Add the eggs.".to_string()],
        ))
        .into_string();

        assert!(html.contains("Shakshuka"));
        assert!(html.contains("Prep: 10 minutes"));
        assert!(html.contains("Cook: 20 minutes"));
        assert!(html.contains("4 servings"));
        assert_eq!(html.matches("(You have this)").count(), 1);
        assert!(html.contains("<li>Simmer the sauce.</li><li>Add the eggs.</li>"));
    }

    #[test]
    fn test_card_with_no_ingredients_or_steps() {
        let html = recipe_card(&recipe(vec![], vec![])).into_string();
        assert!(html.contains(r#"<ul class="ingredients"></ul>"#));
        assert!(html.contains(r#"<ol class="instructions"></ol>"#));
    }
}
