//! Summary enhancement action.
//!
//! Flow: check-and-set the busy flag under the write lock, release the lock,
//! call the gateway in a spawned task, then apply the rewrite through the
//! normal field-edit path. The spawned task always clears the flag, even if
//! the originating request is dropped mid-call.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::editor::operations::{set_field, ResumeField};
use crate::errors::AppError;
use crate::gateway::AiGateway;
use crate::shell::SharedWorkspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhanceOutcome {
    /// Summary was empty; no call issued.
    Skipped,
    /// Summary replaced with the rewrite.
    Applied,
    /// Service returned the original text (or nothing); summary untouched.
    Unchanged,
    /// Call failed; logged, summary untouched.
    Failed,
}

pub async fn run_enhancement(
    workspace: SharedWorkspace,
    gateway: Arc<dyn AiGateway>,
) -> Result<EnhanceOutcome, AppError> {
    let (summary, role_label) = {
        let mut ws = workspace.write().await;
        if ws.resume.summary.trim().is_empty() {
            return Ok(EnhanceOutcome::Skipped);
        }
        if !ws.editor.try_begin_enhance() {
            warn!("Summary enhancement already in progress; rejecting duplicate request");
            return Err(AppError::Conflict(
                "Summary enhancement already in progress".to_string(),
            ));
        }
        (ws.resume.summary.clone(), ws.resume.role_label().to_string())
    };

    info!("Enhancing summary for role '{role_label}'");

    let task = tokio::spawn(async move {
        let reply = gateway.enhance_summary(&summary, &role_label).await;

        let mut ws = workspace.write().await;
        ws.editor.finish_enhance();

        match reply {
            Ok(text) if text == summary => EnhanceOutcome::Unchanged,
            Ok(text) => {
                let next = set_field(&ws.resume, ResumeField::Summary, &text);
                ws.replace_resume(next);
                EnhanceOutcome::Applied
            }
            Err(e) => {
                error!("Summary enhancement failed: {e}");
                EnhanceOutcome::Failed
            }
        }
    });

    task.await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("enhancement task aborted: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::stub::{EnhanceReply, StubGateway};
    use crate::gateway::MISSING_KEY_PLACEHOLDER;
    use crate::shell::Workspace;

    async fn workspace_with_summary(summary: &str) -> SharedWorkspace {
        let workspace = Workspace::shared();
        {
            let mut ws = workspace.write().await;
            let next = set_field(&ws.resume, ResumeField::Summary, summary);
            ws.replace_resume(next);
        }
        workspace
    }

    #[tokio::test]
    async fn test_empty_summary_issues_no_call() {
        let workspace = workspace_with_summary("").await;
        let stub = Arc::new(StubGateway::enhancing(EnhanceReply::Text(Some(
            "Rewritten".to_string(),
        ))));

        let outcome = run_enhancement(workspace.clone(), stub.clone()).await.unwrap();

        assert_eq!(outcome, EnhanceOutcome::Skipped);
        assert_eq!(stub.enhance_calls(), 0);
        assert!(!workspace.read().await.editor.is_enhancing());
    }

    #[tokio::test]
    async fn test_rewrite_replaces_summary() {
        let workspace = workspace_with_summary("I write code.").await;
        let stub = Arc::new(StubGateway::enhancing(EnhanceReply::Text(Some(
            "Backend engineer shipping reliable payment systems.".to_string(),
        ))));

        let outcome = run_enhancement(workspace.clone(), stub.clone()).await.unwrap();

        let ws = workspace.read().await;
        assert_eq!(outcome, EnhanceOutcome::Applied);
        assert_eq!(
            ws.resume.summary,
            "Backend engineer shipping reliable payment systems."
        );
        assert!(!ws.editor.is_enhancing());
    }

    #[tokio::test]
    async fn test_empty_service_response_leaves_summary() {
        let workspace = workspace_with_summary("I write code.").await;
        let stub = Arc::new(StubGateway::enhancing(EnhanceReply::Text(Some(
            String::new(),
        ))));

        let outcome = run_enhancement(workspace.clone(), stub.clone()).await.unwrap();

        assert_eq!(outcome, EnhanceOutcome::Unchanged);
        assert_eq!(stub.enhance_calls(), 1);
        assert_eq!(workspace.read().await.resume.summary, "I write code.");
    }

    #[tokio::test]
    async fn test_failure_leaves_summary_and_clears_busy() {
        let workspace = workspace_with_summary("I write code.").await;
        let stub = Arc::new(StubGateway::enhancing(EnhanceReply::Transport(
            "503 Service Unavailable".to_string(),
        )));

        let outcome = run_enhancement(workspace.clone(), stub).await.unwrap();

        let ws = workspace.read().await;
        assert_eq!(outcome, EnhanceOutcome::Failed);
        assert_eq!(ws.resume.summary, "I write code.");
        assert!(!ws.editor.is_enhancing());
    }

    #[tokio::test]
    async fn test_busy_editor_rejects_second_request() {
        let workspace = workspace_with_summary("I write code.").await;
        workspace.write().await.editor.try_begin_enhance();
        let stub = Arc::new(StubGateway::enhancing(EnhanceReply::Text(None)));

        let err = run_enhancement(workspace.clone(), stub.clone()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(stub.enhance_calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_placeholder_flows_into_summary() {
        let workspace = workspace_with_summary("I write code.").await;
        let stub = Arc::new(StubGateway::enhancing(EnhanceReply::MissingCredential));

        let outcome = run_enhancement(workspace.clone(), stub).await.unwrap();

        assert_eq!(outcome, EnhanceOutcome::Applied);
        assert_eq!(workspace.read().await.resume.summary, MISSING_KEY_PLACEHOLDER);
    }
}
