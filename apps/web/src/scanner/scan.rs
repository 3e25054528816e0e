//! Scan action: validate, mark scanning, call the gateway in a spawned task,
//! record the outcome. The workspace lock is never held across the call.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::gateway::AiGateway;
use crate::scanner::resume_text::format_resume_for_ai;
use crate::scanner::state::{ScanRejection, ScannerState};
use crate::shell::SharedWorkspace;

/// Runs one scan against the current resume. On success returns the scanner
/// state after completion; every failure is also recorded in the state.
pub async fn run_scan(
    workspace: SharedWorkspace,
    gateway: Arc<dyn AiGateway>,
) -> Result<ScannerState, AppError> {
    let (resume_text, job_description) = {
        let mut ws = workspace.write().await;
        let resume = ws.resume.clone();
        match ws.scanner.begin(&resume) {
            Ok(job_description) => (format_resume_for_ai(&resume), job_description),
            Err(ScanRejection::InProgress) => {
                warn!("Scan already in progress; rejecting duplicate request");
                return Err(AppError::Conflict("A scan is already in progress".to_string()));
            }
            Err(ScanRejection::Invalid(failure)) => {
                return Err(AppError::Validation(failure.message));
            }
        }
    };

    info!(
        "Scanning resume against job description ({} chars)",
        job_description.len()
    );

    let task = tokio::spawn(async move {
        let reply = gateway.analyze(&resume_text, &job_description).await;

        let mut ws = workspace.write().await;
        match reply {
            Ok(result) => {
                info!("Scan complete: score={}", result.score);
                ws.scanner.complete(result);
                Ok(ws.scanner.clone())
            }
            Err(e) => {
                ws.scanner.fail((&e).into());
                Err(AppError::from(e))
            }
        }
    });

    task.await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("scan task aborted: {e}")))?
}
