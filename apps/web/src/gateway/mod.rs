//! AI Gateway: translates resume data into prompts and Gemini responses into
//! typed results.
//!
//! `AppState` holds an `Arc<dyn AiGateway>`; tests swap in `stub::StubGateway`.

pub mod prompts;
#[cfg(test)]
pub mod stub;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::gateway::prompts::{
    analysis_response_schema, build_analysis_prompt, build_summary_prompt,
};
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::models::AnalysisResult;

/// Returned by `enhance_summary` when no credential is configured.
///
/// Analyze fails hard on the same precondition. The asymmetry is kept on
/// purpose: the placeholder flows into the summary like any other rewrite.
pub const MISSING_KEY_PLACEHOLDER: &str = "API Key missing";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API Key is missing. Please check your environment configuration.")]
    MissingCredential,

    #[error("{0}")]
    Transport(String),

    #[error("No response from AI")]
    NoResponse,

    #[error("AI returned a malformed analysis: {0}")]
    MalformedResponse(String),
}

impl From<LlmError> for GatewayError {
    fn from(err: LlmError) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

/// The two operations the UI needs from the generative service.
#[async_trait]
pub trait AiGateway: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, GatewayError>;

    async fn enhance_summary(
        &self,
        current_summary: &str,
        role_label: &str,
    ) -> Result<String, GatewayError>;
}

/// Parses the raw structured payload of an analysis call.
///
/// An absent or blank payload is `NoResponse`; anything that fails to decode
/// into `AnalysisResult` is `MalformedResponse`.
pub fn parse_analysis(raw: Option<&str>) -> Result<AnalysisResult, GatewayError> {
    let text = raw
        .map(strip_json_fences)
        .filter(|t| !t.is_empty())
        .ok_or(GatewayError::NoResponse)?;

    serde_json::from_str(text).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

/// Picks the rewrite, or the original text if the service returned nothing.
pub fn summary_or_original(rewrite: Option<String>, original: &str) -> String {
    match rewrite {
        Some(text) if !text.trim().is_empty() => text,
        _ => original.to_string(),
    }
}

/// Gateway backed by the Gemini API. `client` is `None` when no credential
/// is configured.
pub struct GeminiGateway {
    client: Option<LlmClient>,
}

impl GeminiGateway {
    pub fn new(client: Option<LlmClient>) -> Self {
        if client.is_none() {
            info!("No Gemini API key configured; scans will fail with a configuration error");
        }
        Self { client }
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, GatewayError> {
        let client = self.client.as_ref().ok_or(GatewayError::MissingCredential)?;

        let prompt = build_analysis_prompt(resume_text, job_description);
        let schema = analysis_response_schema();

        let response = client.generate_json(&prompt, &schema).await.map_err(|e| {
            error!("Gemini analysis error: {e}");
            GatewayError::from(e)
        })?;

        let result = parse_analysis(response.text().as_deref())?;
        debug!(
            "Analysis parsed: score={}, missing_keywords={}",
            result.score,
            result.missing_keywords.len()
        );
        Ok(result)
    }

    async fn enhance_summary(
        &self,
        current_summary: &str,
        role_label: &str,
    ) -> Result<String, GatewayError> {
        let Some(client) = self.client.as_ref() else {
            return Ok(MISSING_KEY_PLACEHOLDER.to_string());
        };

        let prompt = build_summary_prompt(current_summary, role_label);
        let response = client.generate_text(&prompt).await?;

        Ok(summary_or_original(response.text(), current_summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_without_credential_fails_before_network() {
        let gateway = GeminiGateway::new(None);
        let err = gateway.analyze("Name: Ada", "Rust role").await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential));
        assert!(err.to_string().contains("API Key is missing"));
    }

    #[tokio::test]
    async fn test_enhance_without_credential_returns_placeholder() {
        let gateway = GeminiGateway::new(None);
        let text = gateway
            .enhance_summary("I build things.", "Professional")
            .await
            .unwrap();
        assert_eq!(text, MISSING_KEY_PLACEHOLDER);
    }

    #[test]
    fn test_parse_analysis_empty_is_no_response() {
        assert!(matches!(parse_analysis(None), Err(GatewayError::NoResponse)));
        assert!(matches!(
            parse_analysis(Some("   ")),
            Err(GatewayError::NoResponse)
        ));
    }

    #[test]
    fn test_parse_analysis_garbage_is_malformed() {
        let err = parse_analysis(Some("Sorry, I can't help with that.")).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
        assert_ne!(err.to_string(), GatewayError::NoResponse.to_string());
    }

    #[test]
    fn test_parse_analysis_accepts_fenced_json() {
        let raw = "```json\n{\"score\": 88, \"missingKeywords\": [\"Terraform\"]}\n```";
        let result = parse_analysis(Some(raw)).unwrap();
        assert_eq!(result.score, 88);
        assert_eq!(result.missing_keywords, vec!["Terraform".to_string()]);
    }

    #[test]
    fn test_summary_falls_back_to_original_on_empty_rewrite() {
        assert_eq!(summary_or_original(None, "orig"), "orig");
        assert_eq!(summary_or_original(Some("  \n".to_string()), "orig"), "orig");
        assert_eq!(summary_or_original(Some("new".to_string()), "orig"), "new");
    }

    #[test]
    fn test_transport_error_keeps_underlying_message() {
        let err: GatewayError = LlmError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        }
        .into();
        assert!(err.to_string().contains("API key not valid"));
    }
}
