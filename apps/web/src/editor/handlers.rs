//! Axum route handlers for the Resume Editor.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::editor::enhance::{run_enhancement, EnhanceOutcome};
use crate::editor::operations::{
    add_experience, remove_experience, set_experience_field, set_field, ExperienceField,
    ResumeField,
};
use crate::editor::render::render_editor;
use crate::errors::AppError;
use crate::models::ResumeData;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FieldEditRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceEditRequest {
    pub field: ExperienceField,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct AddExperienceResponse {
    pub id: Uuid,
    pub resume: ResumeData,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub outcome: EnhanceOutcome,
    pub resume: ResumeData,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    Json(state.workspace.read().await.resume.clone())
}

/// PUT /api/v1/resume/fields/:field
///
/// Called on every keystroke. Any text is accepted, including empty.
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path(field): Path<ResumeField>,
    Json(request): Json<FieldEditRequest>,
) -> Json<ResumeData> {
    let mut ws = state.workspace.write().await;
    let next = set_field(&ws.resume, field, &request.value);
    Json(ws.replace_resume(next).clone())
}

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Json<AddExperienceResponse> {
    let mut ws = state.workspace.write().await;
    let (next, id) = add_experience(&ws.resume);
    debug!("Added experience entry {id}");
    Json(AddExperienceResponse {
        id,
        resume: ws.replace_resume(next).clone(),
    })
}

/// PATCH /api/v1/resume/experience/:id
///
/// Unknown ids leave the list unchanged.
pub async fn handle_set_experience_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExperienceEditRequest>,
) -> Json<ResumeData> {
    let mut ws = state.workspace.write().await;
    let next = set_experience_field(&ws.resume, id, request.field, &request.value);
    Json(ws.replace_resume(next).clone())
}

/// DELETE /api/v1/resume/experience/:id
///
/// Removing an id that is not present is a no-op, not a 404.
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ResumeData> {
    let mut ws = state.workspace.write().await;
    let next = remove_experience(&ws.resume, id);
    debug!("Removed experience entry {id}");
    Json(ws.replace_resume(next).clone())
}

/// POST /api/v1/resume/summary/enhance
///
/// Failures are logged and reported as `outcome: "failed"`, not as an error
/// status. Only a duplicate request while busy is rejected (409).
pub async fn handle_enhance_summary(
    State(state): State<AppState>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let outcome = run_enhancement(state.workspace.clone(), state.gateway.clone()).await?;
    info!("Summary enhancement finished: {outcome:?}");

    let resume = state.workspace.read().await.resume.clone();
    Ok(Json(EnhanceResponse { outcome, resume }))
}

/// GET /fragments/editor
pub async fn handle_editor_fragment(State(state): State<AppState>) -> Html<String> {
    let ws = state.workspace.read().await;
    Html(render_editor(&ws.resume, &ws.editor))
}
