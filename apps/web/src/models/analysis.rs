use serde::{Deserialize, Deserializer, Serialize};

/// The five fixed skill-gap axes requested from the model, in display order.
pub const SKILL_GAP_CATEGORIES: [&str; 5] = [
    "Technical",
    "Soft Skills",
    "Experience",
    "Education",
    "Domain Knowledge",
];

/// Structured result of one job-match scan. Replaced wholesale on every scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(deserialize_with = "percent_from_number")]
    pub score: u8, // 0 – 100
    #[serde(default)]
    pub match_summary: String,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub skill_gap_analysis: Vec<SkillGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub category: String,
    #[serde(deserialize_with = "percent_from_number")]
    pub score: u8,
}

/// The model declares scores as NUMBER, so `72.0` and `72.4` both arrive.
/// Round and clamp into 0–100 rather than rejecting the whole result.
fn percent_from_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(serde::de::Error::custom("score must be a finite number"));
    }
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}
