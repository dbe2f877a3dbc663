use thiserror::Error;

use crate::llm::LlmError;

/// Failure of a single recipe generation.
///
/// Messages are meant to be shown to the user; they never carry a backtrace.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Received an empty response from the API")]
    EmptyResponse,

    #[error("The API returned recipes in an unexpected format ({0})")]
    InvalidResponse(String),

    #[error("Could not communicate with the recipe service ({0})")]
    Service(#[from] LlmError),
}

/// Form input that cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter at least one ingredient")]
    EmptyIngredients,
}

/// A submission the controller refused to start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A recipe generation is already in progress")]
    InProgress,
}
