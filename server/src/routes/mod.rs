mod generate;
mod index;
mod settings;
mod status;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

/// Returns the router for the whole site
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index::show_page))
        .route("/generate", post(generate::submit))
        .route("/settings", post(settings::save_settings))
        .route("/api/state", get(status::get_state))
}
