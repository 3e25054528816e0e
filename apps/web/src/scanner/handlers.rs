//! Axum route handlers for the Scanner view.

use axum::{extract::State, response::Html, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::scanner::render::render_scanner;
use crate::scanner::scan::run_scan;
use crate::scanner::state::ScannerState;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

/// GET /api/v1/scanner
pub async fn handle_get_scanner(State(state): State<AppState>) -> Json<ScannerState> {
    Json(state.workspace.read().await.scanner.clone())
}

/// PUT /api/v1/scanner/job-description
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Json<ScannerState> {
    let mut ws = state.workspace.write().await;
    ws.scanner.set_job_description(&request.text);
    Json(ws.scanner.clone())
}

/// POST /api/v1/scanner/scan
///
/// Validation failures return 400 before any AI call. Every failure is also
/// recorded in the scanner state so the next fragment render shows it.
pub async fn handle_scan(State(state): State<AppState>) -> Result<Json<ScannerState>, AppError> {
    let scanner = run_scan(state.workspace.clone(), state.gateway.clone()).await?;
    Ok(Json(scanner))
}

/// GET /fragments/scanner
pub async fn handle_scanner_fragment(State(state): State<AppState>) -> Html<String> {
    let ws = state.workspace.read().await;
    Html(render_scanner(&ws.scanner, &ws.resume))
}
