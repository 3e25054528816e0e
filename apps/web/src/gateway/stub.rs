//! Deterministic `AiGateway` for tests. Replies are scripted up front and
//! every call is counted so tests can assert that no request was issued.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::gateway::{
    parse_analysis, summary_or_original, AiGateway, GatewayError, MISSING_KEY_PLACEHOLDER,
};
use crate::models::analysis::SkillGap;
use crate::models::{AnalysisResult, SKILL_GAP_CATEGORIES};

#[derive(Clone)]
pub enum AnalyzeReply {
    Result(AnalysisResult),
    /// Runs through the real payload parser.
    Raw(Option<String>),
    Transport(String),
    MissingCredential,
}

#[derive(Clone)]
pub enum EnhanceReply {
    /// Runs through the real empty-response fallback.
    Text(Option<String>),
    Transport(String),
    MissingCredential,
}

pub struct StubGateway {
    analyze_reply: AnalyzeReply,
    enhance_reply: EnhanceReply,
    analyze_calls: AtomicUsize,
    enhance_calls: AtomicUsize,
    last_resume_text: Mutex<Option<String>>,
    analyze_gate: Option<Arc<Notify>>,
}

impl StubGateway {
    pub fn new(analyze_reply: AnalyzeReply, enhance_reply: EnhanceReply) -> Self {
        Self {
            analyze_reply,
            enhance_reply,
            analyze_calls: AtomicUsize::new(0),
            enhance_calls: AtomicUsize::new(0),
            last_resume_text: Mutex::new(None),
            analyze_gate: None,
        }
    }

    /// `analyze` parks on `gate` until the test releases it.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.analyze_gate = Some(gate);
        self
    }

    pub fn analyzing(reply: AnalyzeReply) -> Self {
        Self::new(reply, EnhanceReply::Text(None))
    }

    pub fn enhancing(reply: EnhanceReply) -> Self {
        Self::new(AnalyzeReply::Raw(None), reply)
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    pub fn enhance_calls(&self) -> usize {
        self.enhance_calls.load(Ordering::SeqCst)
    }

    pub fn last_resume_text(&self) -> Option<String> {
        self.last_resume_text.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiGateway for StubGateway {
    async fn analyze(
        &self,
        resume_text: &str,
        _job_description: &str,
    ) -> Result<AnalysisResult, GatewayError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_resume_text.lock().unwrap() = Some(resume_text.to_string());
        if let Some(gate) = &self.analyze_gate {
            gate.notified().await;
        }

        match &self.analyze_reply {
            AnalyzeReply::Result(result) => Ok(result.clone()),
            AnalyzeReply::Raw(raw) => parse_analysis(raw.as_deref()),
            AnalyzeReply::Transport(msg) => Err(GatewayError::Transport(msg.clone())),
            AnalyzeReply::MissingCredential => Err(GatewayError::MissingCredential),
        }
    }

    async fn enhance_summary(
        &self,
        current_summary: &str,
        _role_label: &str,
    ) -> Result<String, GatewayError> {
        self.enhance_calls.fetch_add(1, Ordering::SeqCst);

        match &self.enhance_reply {
            EnhanceReply::Text(text) => Ok(summary_or_original(text.clone(), current_summary)),
            EnhanceReply::Transport(msg) => Err(GatewayError::Transport(msg.clone())),
            EnhanceReply::MissingCredential => Ok(MISSING_KEY_PLACEHOLDER.to_string()),
        }
    }
}

/// A well-formed result with the given score and missing keywords.
pub fn sample_analysis(score: u8, missing_keywords: &[&str]) -> AnalysisResult {
    AnalysisResult {
        score,
        match_summary: "Strong backend background; limited cloud exposure.".to_string(),
        missing_keywords: missing_keywords.iter().map(|k| k.to_string()).collect(),
        suggestions: vec![
            "Quantify the impact of the payments migration.".to_string(),
            "Mention on-call ownership explicitly.".to_string(),
        ],
        skill_gap_analysis: SKILL_GAP_CATEGORIES
            .iter()
            .map(|c| SkillGap {
                category: c.to_string(),
                score: 70,
            })
            .collect(),
    }
}
