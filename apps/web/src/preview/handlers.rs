//! Axum route handlers for the preview pane and print export.

use axum::{extract::State, response::Html};

use crate::preview::render::{render_preview, render_print_page};
use crate::state::AppState;

/// GET /fragments/preview
pub async fn handle_preview_fragment(State(state): State<AppState>) -> Html<String> {
    let ws = state.workspace.read().await;
    Html(render_preview(&ws.resume))
}

/// GET /print
///
/// Export: serves the preview as a page that opens the browser's print dialog.
pub async fn handle_print(State(state): State<AppState>) -> Html<String> {
    let ws = state.workspace.read().await;
    Html(render_print_page(&ws.resume))
}
