use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use larder_core::{Failure, GenerationError, LlmError, RecipeForm, SubmitError, ValidationError};

use super::index::render_page;
use crate::state::{ServerState, SharedState};

pub const MISSING_API_KEY_MESSAGE: &str =
    "Please enter your Google Gemini API key above to generate recipes.";

/// Handle a form submission.
///
/// An invalid form is re-rendered with a 422 and does not touch the state.
/// Otherwise the state enters `Loading`, generation runs in the background and
/// the browser is sent back to the page, which refreshes until it is done. A
/// submission that arrives while a generation is running is ignored.
pub async fn submit(State(state): State<SharedState>, Form(form): Form<RecipeForm>) -> Response {
    state.set_form(form.clone()).await;

    if let Err(e) = form.validate() {
        return invalid_form(&state, e).await;
    }

    let provider = match state.provider().await {
        Ok(provider) => provider,
        Err(LlmError::NotConfigured(reason)) => {
            tracing::info!(reason = %reason, "Submission refused");
            state.controller.reject(MISSING_API_KEY_MESSAGE).await;
            return Redirect::to("/").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create recipe provider");
            let message = Failure::from(GenerationError::from(e)).user_message();
            state.controller.reject(message).await;
            return Redirect::to("/").into_response();
        }
    };

    match state.controller.spawn_exclusive(&form, provider).await {
        Ok((generation, _)) => {
            tracing::debug!(%generation, "Generation running in background");
            Redirect::to("/").into_response()
        }
        Err(SubmitError::InProgress) => {
            tracing::warn!("Ignoring submission while a generation is in flight");
            Redirect::to("/").into_response()
        }
        Err(SubmitError::Invalid(e)) => invalid_form(&state, e).await,
    }
}

async fn invalid_form(state: &ServerState, error: ValidationError) -> Response {
    let notice = error.to_string();
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        render_page(state, Some(&notice)).await,
    )
        .into_response()
}
