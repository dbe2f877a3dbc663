//! HTML rendering. Every function here is a pure function of its arguments.

mod form;
mod layout;
mod recipe;
mod status;

pub use form::{ingredient_form, settings_panel};
pub use layout::document;
pub use recipe::recipe_card;
pub use status::{empty_results, error_banner, idle_placeholder, loading_spinner};

use larder_core::{AppModel, AppState, RecipeForm};
use maud::{html, Markup};

/// Everything needed to render the single page.
pub struct PageView<'a> {
    pub model: &'a AppModel,
    pub form: &'a RecipeForm,
    /// Whether a submission would find a usable credential.
    pub has_api_key: bool,
    /// Inline message next to the form, e.g. a validation problem.
    pub notice: Option<&'a str>,
}

pub fn page(view: &PageView<'_>) -> Markup {
    let loading = view.model.is_loading();

    document(
        loading,
        html! {
            p.intro {
                "Tired of staring at a full fridge with no idea what to make? Enter the ingredients you have, and let our AI chef whip up some delicious recipe ideas for you!"
            }
            (settings_panel(view.has_api_key))
            (ingredient_form(view.form, loading, view.notice))
            (result_area(view.model.state()))
        },
    )
}

/// The part of the page driven by the state machine.
pub fn result_area(state: &AppState) -> Markup {
    match state {
        AppState::Idle => idle_placeholder(),
        AppState::Loading { .. } => loading_spinner(),
        AppState::Failed { message } => error_banner(message),
        AppState::Success { recipes } if recipes.is_empty() => empty_results(),
        AppState::Success { recipes } => html! {
            section.recipes {
                h2 { "Your Custom Recipes" }
                @for recipe in recipes {
                    (recipe_card(recipe))
                }
            }
        },
    }
}
