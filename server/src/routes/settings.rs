use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use crate::state::SharedState;

/// No `Debug`: the key must not end up in logs.
#[derive(Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub api_key: String,
}

/// Store the API key in memory. A blank key clears it.
pub async fn save_settings(
    State(state): State<SharedState>,
    Form(settings): Form<SettingsForm>,
) -> Redirect {
    state.set_api_key(Some(settings.api_key)).await;
    let has_key = state.has_user_api_key().await;
    tracing::info!(has_key, "Updated API key");
    Redirect::to("/")
}
