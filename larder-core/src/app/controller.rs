//! Drives the state machine from form submissions and provider results.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::state::{AppModel, Event, Failure, GenerationId};
use crate::ai::generate_recipes;
use crate::error::{SubmitError, ValidationError};
use crate::form::RecipeForm;
use crate::llm::LlmProvider;
use crate::types::{GenerationRequest, Recipe};

/// Sole owner of the [`AppModel`].
///
/// Every change goes through [`Event`]s and the pure reducer; the controller only
/// serializes access and runs the generation call.
#[derive(Debug, Default)]
pub struct Controller {
    model: Mutex<AppModel>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current model, for rendering.
    pub async fn snapshot(&self) -> AppModel {
        self.model.lock().await.clone()
    }

    /// Apply one event and return the resulting model.
    pub async fn dispatch(&self, event: Event) -> AppModel {
        let mut model = self.model.lock().await;
        *model = std::mem::take(&mut *model).apply(event);
        model.clone()
    }

    /// Validate the form and enter `Loading`.
    ///
    /// Previous recipes and errors are gone by the time this returns. An invalid
    /// form leaves the state untouched. A generation already in flight is
    /// superseded and its result will be discarded.
    pub async fn begin(
        &self,
        form: &RecipeForm,
    ) -> Result<(GenerationId, GenerationRequest), ValidationError> {
        let request = form.validate()?;
        let mut model = self.model.lock().await;
        Ok((enter_loading(&mut model), request))
    }

    /// Like [`Controller::begin`], but refuses while a generation is in flight.
    ///
    /// The check and the transition happen under one lock, so of two concurrent
    /// submissions exactly one starts.
    pub async fn begin_exclusive(
        &self,
        form: &RecipeForm,
    ) -> Result<(GenerationId, GenerationRequest), SubmitError> {
        let request = form.validate()?;
        let mut model = self.model.lock().await;
        if model.is_loading() {
            return Err(SubmitError::InProgress);
        }
        Ok((enter_loading(&mut model), request))
    }

    /// Record the outcome of a generation. Returns false if it was superseded.
    pub async fn finish(
        &self,
        generation: GenerationId,
        outcome: Result<Vec<Recipe>, Failure>,
    ) -> bool {
        let mut model = self.model.lock().await;
        let current = model.current_generation() == Some(generation);
        *model = std::mem::take(&mut *model).apply(Event::Finished {
            generation,
            outcome,
        });
        current
    }

    /// Refuse a submission before any request is made.
    pub async fn reject(&self, message: impl Into<String>) -> AppModel {
        self.dispatch(Event::Rejected(message.into())).await
    }

    /// Run one submission to completion on the current task.
    pub async fn run(
        &self,
        form: &RecipeForm,
        provider: &dyn LlmProvider,
    ) -> Result<AppModel, ValidationError> {
        let (generation, request) = self.begin(form).await?;
        let outcome = generate_recipes(provider, &request)
            .await
            .map_err(Failure::from);
        self.finish(generation, outcome).await;
        Ok(self.snapshot().await)
    }

    /// Start a submission in the background.
    ///
    /// The state is `Loading` when this returns. The returned handle completes
    /// once the result has been recorded; a generation task that panics or is
    /// cancelled is recorded as [`Failure::Unknown`].
    pub async fn spawn(
        self: &Arc<Self>,
        form: &RecipeForm,
        provider: Arc<dyn LlmProvider>,
    ) -> Result<(GenerationId, JoinHandle<()>), ValidationError> {
        let (generation, request) = self.begin(form).await?;
        Ok((generation, self.spawn_generation(generation, request, provider)))
    }

    /// Start a submission in the background unless one is already running.
    pub async fn spawn_exclusive(
        self: &Arc<Self>,
        form: &RecipeForm,
        provider: Arc<dyn LlmProvider>,
    ) -> Result<(GenerationId, JoinHandle<()>), SubmitError> {
        let (generation, request) = self.begin_exclusive(form).await?;
        Ok((generation, self.spawn_generation(generation, request, provider)))
    }

    fn spawn_generation(
        self: &Arc<Self>,
        generation: GenerationId,
        request: GenerationRequest,
        provider: Arc<dyn LlmProvider>,
    ) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            let task =
                tokio::spawn(async move { generate_recipes(provider.as_ref(), &request).await });

            let outcome = match task.await {
                Ok(result) => result.map_err(Failure::from),
                Err(e) => {
                    error!(%generation, error = %e, "Recipe generation task failed");
                    Err(Failure::Unknown)
                }
            };

            controller.finish(generation, outcome).await;
        })
    }
}

fn enter_loading(model: &mut AppModel) -> GenerationId {
    let generation = model.upcoming_generation();
    *model = std::mem::take(model).apply(Event::Submitted);
    info!(%generation, "Starting recipe generation");
    generation
}
