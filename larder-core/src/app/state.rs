//! The page state machine.
//!
//! All changes go through [`transition`], which is pure: it takes the current
//! model and an event and returns the next model.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::GenerationError;
use crate::types::Recipe;

/// Identifies one submission. Results carrying an older id are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GenerationId(u64);

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the result area of the page shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AppState {
    #[default]
    Idle,
    Loading {
        generation: GenerationId,
    },
    Success {
        recipes: Vec<Recipe>,
    },
    Failed {
        message: String,
    },
}

/// Why a generation did not produce recipes.
#[derive(Debug)]
pub enum Failure {
    Generation(GenerationError),
    /// The generation task died without reporting a result.
    Unknown,
}

impl Failure {
    /// Message shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Failure::Generation(e) => format!(
                "Failed to generate recipes: {}. Please check your API key and try again.",
                e
            ),
            Failure::Unknown => "An unknown error occurred.".to_string(),
        }
    }
}

impl From<GenerationError> for Failure {
    fn from(e: GenerationError) -> Self {
        Failure::Generation(e)
    }
}

/// Inputs to the state machine.
#[derive(Debug)]
pub enum Event {
    /// A validated form was submitted.
    Submitted,
    /// A generation finished, successfully or not.
    Finished {
        generation: GenerationId,
        outcome: Result<Vec<Recipe>, Failure>,
    },
    /// A submission was refused before any request was made. Ignored while
    /// `Loading`, so the in-flight generation still lands.
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppModel {
    state: AppState,
    next_generation: u64,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AppState::Loading { .. })
    }

    /// The id the next `Submitted` event will assign.
    pub fn upcoming_generation(&self) -> GenerationId {
        GenerationId(self.next_generation)
    }

    /// The id of the in-flight generation, if any.
    pub fn current_generation(&self) -> Option<GenerationId> {
        match self.state {
            AppState::Loading { generation } => Some(generation),
            _ => None,
        }
    }

    /// Recipes to display; empty unless the last generation succeeded.
    pub fn recipes(&self) -> &[Recipe] {
        match &self.state {
            AppState::Success { recipes } => recipes.as_slice(),
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AppState::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn apply(self, event: Event) -> Self {
        transition(self, event)
    }
}

/// Compute the model that follows `event`.
pub fn transition(model: AppModel, event: Event) -> AppModel {
    match event {
        Event::Submitted => AppModel {
            state: AppState::Loading {
                generation: GenerationId(model.next_generation),
            },
            next_generation: model.next_generation + 1,
        },
        Event::Finished {
            generation,
            outcome,
        } => {
            if model.current_generation() != Some(generation) {
                debug!(%generation, "Ignoring result of a superseded generation");
                return model;
            }
            let state = match outcome {
                Ok(recipes) => AppState::Success { recipes },
                Err(failure) => AppState::Failed {
                    message: failure.user_message(),
                },
            };
            AppModel { state, ..model }
        }
        Event::Rejected(message) => {
            if let Some(generation) = model.current_generation() {
                debug!(%generation, %message, "Ignoring rejection while a generation is in flight");
                return model;
            }
            AppModel {
                state: AppState::Failed { message },
                ..model
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            recipe_name: name.to_string(),
            description: "Tasty".to_string(),
            prep_time: "5 minutes".to_string(),
            cook_time: "10 minutes".to_string(),
            servings: "1 serving".to_string(),
            ingredients: vec![Ingredient {
                name: "egg".to_string(),
                amount: "2".to_string(),
                provided: true,
            }],
            instructions: vec!["Cook.".to_string()],
        }
    }

    fn loading() -> (AppModel, GenerationId) {
        let model = AppModel::new();
        let generation = model.upcoming_generation();
        (model.apply(Event::Submitted), generation)
    }

    #[test]
    fn test_starts_idle() {
        let model = AppModel::new();
        assert_eq!(model.state(), &AppState::Idle);
        assert!(model.recipes().is_empty());
        assert_eq!(model.error(), None);
    }

    #[test]
    fn test_submit_enters_loading_with_upcoming_id() {
        let (model, generation) = loading();
        assert!(model.is_loading());
        assert_eq!(model.current_generation(), Some(generation));
    }

    #[test]
    fn test_submit_clears_previous_result_and_error() {
        let (model, generation) = loading();
        let succeeded = model.apply(Event::Finished {
            generation,
            outcome: Ok(vec![recipe("Omelette")]),
        });
        assert_eq!(succeeded.recipes().len(), 1);

        let reloading = succeeded.apply(Event::Submitted);
        assert!(reloading.is_loading());
        assert!(reloading.recipes().is_empty());

        let second = reloading.current_generation().unwrap();
        let failed = reloading.apply(Event::Finished {
            generation: second,
            outcome: Err(Failure::Unknown),
        });
        assert!(failed.error().is_some());
        let reloading = failed.apply(Event::Submitted);
        assert_eq!(reloading.error(), None);
        assert!(reloading.is_loading());
    }

    #[test]
    fn test_success_keeps_recipes_in_order() {
        let (model, generation) = loading();
        let recipes = vec![recipe("A"), recipe("B"), recipe("C")];
        let model = model.apply(Event::Finished {
            generation,
            outcome: Ok(recipes.clone()),
        });
        assert_eq!(model.state(), &AppState::Success { recipes });
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let (model, generation) = loading();
        let model = model.apply(Event::Finished {
            generation,
            outcome: Ok(vec![]),
        });
        assert_eq!(model.state(), &AppState::Success { recipes: vec![] });
        assert_eq!(model.error(), None);
    }

    #[test]
    fn test_generation_failure_message() {
        let (model, generation) = loading();
        let model = model.apply(Event::Finished {
            generation,
            outcome: Err(GenerationError::EmptyResponse.into()),
        });
        assert_eq!(
            model.error(),
            Some(
                "Failed to generate recipes: Received an empty response from the API. \
                 Please check your API key and try again."
            )
        );
        assert!(!model.is_loading());
    }

    #[test]
    fn test_unknown_failure_message() {
        let (model, generation) = loading();
        let model = model.apply(Event::Finished {
            generation,
            outcome: Err(Failure::Unknown),
        });
        assert_eq!(model.error(), Some("An unknown error occurred."));
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let (model, first) = loading();
        let second = model.upcoming_generation();
        let model = model.apply(Event::Submitted);
        assert_ne!(first, second);

        let model = model.apply(Event::Finished {
            generation: first,
            outcome: Ok(vec![recipe("Stale")]),
        });
        assert_eq!(model.current_generation(), Some(second));

        let model = model.apply(Event::Finished {
            generation: second,
            outcome: Ok(vec![recipe("Fresh")]),
        });
        assert_eq!(model.recipes()[0].recipe_name, "Fresh");
    }

    #[test]
    fn test_result_without_pending_generation_is_ignored() {
        let (model, generation) = loading();
        let done = model.apply(Event::Finished {
            generation,
            outcome: Err(Failure::Unknown),
        });
        let again = done.clone().apply(Event::Finished {
            generation,
            outcome: Ok(vec![recipe("Late")]),
        });
        assert_eq!(again, done);
    }

    #[test]
    fn test_rejected_enters_failed() {
        let model = AppModel::new().apply(Event::Rejected("Missing key".to_string()));
        assert_eq!(model.error(), Some("Missing key"));
    }

    #[test]
    fn test_rejected_while_loading_keeps_generation() {
        let (model, generation) = loading();
        let model = model.apply(Event::Rejected("Missing key".to_string()));
        assert_eq!(model.current_generation(), Some(generation));
        assert_eq!(model.error(), None);

        let model = model.apply(Event::Finished {
            generation,
            outcome: Ok(vec![recipe("Landed")]),
        });
        assert_eq!(model.recipes()[0].recipe_name, "Landed");
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let (model, _) = loading();
        let value = serde_json::to_value(model.state()).unwrap();
        assert_eq!(value["status"], "loading");
        assert_eq!(value["generation"], 0);

        let failed = AppState::Failed {
            message: "boom".to_string(),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["message"], "boom");
    }
}
