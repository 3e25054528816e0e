use std::fmt::Write;

use crate::models::ResumeData;

/// Serializes the resume into the plain-text block embedded in the analysis
/// prompt. Contact details and education are not sent.
pub fn format_resume_for_ai(resume: &ResumeData) -> String {
    let mut text = format!(
        "Name: {}\nSummary: {}\nSkills: {}\nExperience:\n",
        resume.full_name, resume.summary, resume.skills
    );
    for exp in &resume.experience {
        let _ = writeln!(
            text,
            "{} at {} ({}-{}): {}",
            exp.role, exp.company, exp.start_date, exp.end_date, exp.description
        );
    }
    text
}
