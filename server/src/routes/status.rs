use axum::extract::State;
use axum::Json;
use larder_core::AppState;

use crate::state::SharedState;

/// Current state as JSON, e.g. `{"status": "loading", "generation": 3}`.
pub async fn get_state(State(state): State<SharedState>) -> Json<AppState> {
    Json(state.controller.snapshot().await.into_state())
}
