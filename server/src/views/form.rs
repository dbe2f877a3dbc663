use larder_core::RecipeForm;
use maud::{html, Markup};

/// The ingredient form. Submission is disabled while `loading`.
pub fn ingredient_form(form: &RecipeForm, loading: bool, notice: Option<&str>) -> Markup {
    html! {
        form.panel method="post" action="/generate" {
            div {
                label for="ingredients" { "What ingredients do you have?" }
                textarea id="ingredients" name="ingredients" rows="4" required
                    placeholder="e.g., chicken breast, broccoli, carrots, soy sauce" {
                    (form.ingredients)
                }
                p.hint { "Separate ingredients with commas." }
            }
            div {
                label for="meal_type" { "Meal Type (optional)" }
                input id="meal_type" type="text" name="meal_type" value=(form.meal_type)
                    placeholder="e.g., Breakfast, Lunch, Dinner";
            }
            div {
                label for="dietary_restrictions" { "Dietary Restrictions (optional)" }
                input id="dietary_restrictions" type="text" name="dietary_restrictions"
                    value=(form.dietary_restrictions) placeholder="e.g., Vegan, Gluten-Free";
            }
            @if let Some(notice) = notice {
                p.notice role="alert" { (notice) }
            }
            button type="submit" disabled[loading] {
                @if loading { "Generating..." } @else { "Generate Recipes" }
            }
        }
    }
}

/// API key entry. The key is never echoed back into the page.
pub fn settings_panel(has_api_key: bool) -> Markup {
    html! {
        form.panel method="post" action="/settings" {
            h2 { "Settings" }
            label for="api_key" { "Google Gemini API Key" }
            input id="api_key" type="password" name="api_key" autocomplete="off"
                placeholder=(if has_api_key { "A key is set; enter a new one to replace it" } else { "Enter your API key here" });
            p.hint {
                "You can get your API key from "
                a href="https://aistudio.google.com/app/apikey" target="_blank" rel="noopener noreferrer" { "Google AI Studio" }
                "."
            }
            button type="submit" { "Save key" }
        }
    }
}
