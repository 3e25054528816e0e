// Prompt templates and the structured-output schema for the AI Gateway.

use serde_json::{json, Value};

use crate::models::SKILL_GAP_CATEGORIES;

/// Job-match analysis prompt.
/// Replace: {resume_text}, {job_description}, {categories}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert Applicant Tracking System (ATS) and Career Coach.
Analyze the following Resume text against the Job Description.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Provide a detailed analysis in strict JSON format.
1. Calculate a match score (0-100).
2. Provide a brief summary of the fit in 2-3 sentences.
3. List critical missing keywords found in the JD but not the resume.
4. Provide specific, actionable suggestions to improve the resume for this role.
5. Analyze skill gaps in exactly these 5 categories: {categories} with a score of 1-100 for each."#;

/// Summary rewrite prompt. Replace: {role}, {summary}
pub const SUMMARY_REWRITE_PROMPT_TEMPLATE: &str = "Rewrite the following professional summary to be more impactful, concise, and result-oriented for a {role} role. Keep it under 50 words.\n\nCurrent Summary: {summary}";

pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    let categories = SKILL_GAP_CATEGORIES
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ");

    // Fill placeholders back to front so braces inside user text inserted
    // later in the template are never matched.
    ANALYSIS_PROMPT_TEMPLATE
        .replacen("{categories}", &categories, 1)
        .replacen("{job_description}", job_description, 1)
        .replacen("{resume_text}", resume_text, 1)
}

pub fn build_summary_prompt(current_summary: &str, role_label: &str) -> String {
    SUMMARY_REWRITE_PROMPT_TEMPLATE
        .replacen("{summary}", current_summary, 1)
        .replacen("{role}", role_label, 1)
}

/// Gemini `responseSchema` matching `AnalysisResult` field-for-field.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "NUMBER",
                "description": "Overall match score from 0 to 100"
            },
            "matchSummary": {
                "type": "STRING",
                "description": "2-3 sentences summarizing the fit"
            },
            "missingKeywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of important keywords missing from the resume"
            },
            "suggestions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of actionable improvements"
            },
            "skillGapAnalysis": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING", "enum": SKILL_GAP_CATEGORIES },
                        "score": { "type": "NUMBER" }
                    },
                    "required": ["category", "score"]
                }
            }
        },
        "required": ["score", "matchSummary", "missingKeywords", "suggestions", "skillGapAnalysis"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_both_texts_verbatim() {
        let prompt = build_analysis_prompt("Name: Ada\nSkills: Rust", "Senior Rust role, {remote}");
        assert!(prompt.contains("RESUME:\nName: Ada\nSkills: Rust"));
        assert!(prompt.contains("JOB DESCRIPTION:\nSenior Rust role, {remote}"));
    }

    #[test]
    fn test_analysis_prompt_lists_all_categories() {
        let prompt = build_analysis_prompt("r", "j");
        for category in SKILL_GAP_CATEGORIES {
            assert!(prompt.contains(&format!("'{category}'")), "missing {category}");
        }
        assert!(!prompt.contains("{categories}"));
    }

    #[test]
    fn test_user_text_containing_placeholder_is_not_expanded() {
        let prompt = build_analysis_prompt("I wrote {job_description} once", "Backend role");
        assert!(prompt.contains("I wrote {job_description} once"));
        assert!(prompt.contains("JOB DESCRIPTION:\nBackend role"));
    }

    #[test]
    fn test_summary_prompt_names_role_and_word_limit() {
        let prompt = build_summary_prompt("I build things.", "Data Engineer");
        assert!(prompt.contains("for a Data Engineer role"));
        assert!(prompt.contains("under 50 words"));
        assert!(prompt.ends_with("Current Summary: I build things."));
    }

    #[test]
    fn test_schema_field_names_match_result_shape() {
        let schema = analysis_response_schema();
        let props = schema["properties"].as_object().unwrap();
        for field in [
            "score",
            "matchSummary",
            "missingKeywords",
            "suggestions",
            "skillGapAnalysis",
        ] {
            assert!(props.contains_key(field), "schema missing {field}");
        }
        assert_eq!(
            schema["properties"]["skillGapAnalysis"]["items"]["properties"]["category"]["enum"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
    }
}
