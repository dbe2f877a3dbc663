use axum::extract::State;
use axum::response::Html;

use crate::state::{ServerState, SharedState};
use crate::views::{self, PageView};

pub async fn show_page(State(state): State<SharedState>) -> Html<String> {
    render_page(&state, None).await
}

/// Render the page from the current controller snapshot.
pub(super) async fn render_page(state: &ServerState, notice: Option<&str>) -> Html<String> {
    let model = state.controller.snapshot().await;
    let form = state.form().await;
    let has_api_key = state.has_credential().await;

    Html(
        views::page(&PageView {
            model: &model,
            form: &form,
            has_api_key,
            notice,
        })
        .into_string(),
    )
}
