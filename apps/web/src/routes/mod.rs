pub mod health;

use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::preview::handlers as preview;
use crate::scanner::handlers as scanner;
use crate::shell::handlers as shell;
use crate::state::AppState;

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../static/app.js"),
    )
}

async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/style.css"),
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(shell::handle_index))
        .route("/health", get(health::health_handler))
        .route("/static/app.js", get(app_js))
        .route("/static/style.css", get(style_css))
        // HTML fragments
        .route("/fragments/editor", get(editor::handle_editor_fragment))
        .route("/fragments/preview", get(preview::handle_preview_fragment))
        .route("/fragments/scanner", get(scanner::handle_scanner_fragment))
        .route("/print", get(preview::handle_print))
        // Resume Editor API
        .route("/api/v1/resume", get(editor::handle_get_resume))
        .route("/api/v1/resume/fields/:field", put(editor::handle_set_field))
        .route("/api/v1/resume/experience", post(editor::handle_add_experience))
        .route(
            "/api/v1/resume/experience/:id",
            patch(editor::handle_set_experience_field).delete(editor::handle_remove_experience),
        )
        .route(
            "/api/v1/resume/summary/enhance",
            post(editor::handle_enhance_summary),
        )
        // Scanner API
        .route("/api/v1/scanner", get(scanner::handle_get_scanner))
        .route(
            "/api/v1/scanner/job-description",
            put(scanner::handle_set_job_description),
        )
        .route("/api/v1/scanner/scan", post(scanner::handle_scan))
        // Shell API
        .route("/api/v1/shell", get(shell::handle_get_mode))
        .route("/api/v1/shell/mode", put(shell::handle_set_mode))
        .with_state(state)
}
