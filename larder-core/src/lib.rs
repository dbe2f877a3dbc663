pub mod ai;
pub mod app;
pub mod error;
pub mod form;
pub mod llm;
pub mod types;

pub use ai::generate_recipes;
pub use app::{transition, AppModel, AppState, Controller, Event, Failure, GenerationId};
pub use error::{GenerationError, SubmitError, ValidationError};
pub use form::RecipeForm;
pub use llm::{FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use types::{GenerationRequest, Ingredient, Recipe};
