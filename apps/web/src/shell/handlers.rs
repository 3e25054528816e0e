use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};

use crate::shell::render::render_shell;
use crate::shell::ViewMode;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ModePayload {
    pub mode: ViewMode,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let ws = state.workspace.read().await;
    Html(render_shell(&ws))
}

/// GET /api/v1/shell
pub async fn handle_get_mode(State(state): State<AppState>) -> Json<ModePayload> {
    Json(ModePayload {
        mode: state.workspace.read().await.mode,
    })
}

/// PUT /api/v1/shell/mode
pub async fn handle_set_mode(
    State(state): State<AppState>,
    Json(request): Json<ModePayload>,
) -> Json<ModePayload> {
    let mut ws = state.workspace.write().await;
    ws.switch_mode(request.mode);
    Json(ModePayload { mode: ws.mode })
}
