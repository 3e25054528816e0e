//! Scanner state machine: idle → scanning → success | failed.
//!
//! The result only exists in `Success` and the failure only in `Failed`, so a
//! new scan cannot leave a stale result next to a fresh error.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gateway::GatewayError;
use crate::models::{AnalysisResult, ResumeData};

pub const EMPTY_JOB_DESCRIPTION: &str = "Please enter a Job Description.";
pub const MISSING_NAME: &str = "Add your full name in the Resume Builder before scanning.";
const GENERIC_FAILURE: &str = "Failed to analyze resume.";

/// Colour band for the score gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    /// ≥80 green, 60–79 yellow, below 60 red.
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Green
        } else if score >= 60 {
            ScoreBand::Yellow
        } else {
            ScoreBand::Red
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ScoreBand::Green => "#22c55e",
            ScoreBand::Yellow => "#eab308",
            ScoreBand::Red => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Configuration,
    Transport,
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ScanFailure {
    pub fn validation(message: &str) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: message.to_string(),
        }
    }
}

impl From<&GatewayError> for ScanFailure {
    fn from(err: &GatewayError) -> Self {
        let kind = match err {
            GatewayError::MissingCredential => FailureKind::Configuration,
            GatewayError::Transport(_) => FailureKind::Transport,
            GatewayError::NoResponse | GatewayError::MalformedResponse(_) => {
                FailureKind::MalformedResponse
            }
        };
        let message = match err.to_string() {
            m if m.trim().is_empty() => GENERIC_FAILURE.to_string(),
            m => m,
        };
        Self { kind, message }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScanPhase {
    Idle,
    Scanning,
    Success {
        result: AnalysisResult,
        completed_at: DateTime<Utc>,
    },
    Failed {
        failure: ScanFailure,
    },
}

/// Why a scan could not start.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanRejection {
    InProgress,
    Invalid(ScanFailure),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScannerState {
    pub job_description: String,
    pub phase: ScanPhase,
}

impl Default for ScannerState {
    fn default() -> Self {
        Self {
            job_description: String::new(),
            phase: ScanPhase::Idle,
        }
    }
}

impl ScannerState {
    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, ScanPhase::Scanning)
    }

    #[cfg(test)]
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            ScanPhase::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ScanFailure> {
        match &self.phase {
            ScanPhase::Failed { failure } => Some(failure),
            _ => None,
        }
    }

    /// The scan control is enabled when no scan is running and the resume has a name.
    pub fn can_scan(&self, resume: &ResumeData) -> bool {
        !self.is_scanning() && resume.has_name()
    }

    pub fn set_job_description(&mut self, text: &str) {
        self.job_description = text.to_string();
    }

    /// Validates preconditions and enters `Scanning`, clearing any prior
    /// result or error. Validation failures move straight to `Failed`.
    /// Returns the job description to send.
    pub fn begin(&mut self, resume: &ResumeData) -> Result<String, ScanRejection> {
        if self.is_scanning() {
            return Err(ScanRejection::InProgress);
        }

        let failure = if self.job_description.trim().is_empty() {
            Some(ScanFailure::validation(EMPTY_JOB_DESCRIPTION))
        } else if !resume.has_name() {
            Some(ScanFailure::validation(MISSING_NAME))
        } else {
            None
        };
        if let Some(failure) = failure {
            self.phase = ScanPhase::Failed {
                failure: failure.clone(),
            };
            return Err(ScanRejection::Invalid(failure));
        }

        self.phase = ScanPhase::Scanning;
        Ok(self.job_description.clone())
    }

    pub fn complete(&mut self, result: AnalysisResult) {
        self.phase = ScanPhase::Success {
            result,
            completed_at: Utc::now(),
        };
    }

    pub fn fail(&mut self, failure: ScanFailure) {
        self.phase = ScanPhase::Failed { failure };
    }
}
