use std::sync::Arc;

use crate::config::Config;
use crate::gateway::AiGateway;
use crate::shell::SharedWorkspace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable AI backend. Default: GeminiGateway. Tests inject a stub.
    pub gateway: Arc<dyn AiGateway>,
    /// The single session-wide workspace (resume, view mode, per-view state).
    pub workspace: SharedWorkspace,
}
