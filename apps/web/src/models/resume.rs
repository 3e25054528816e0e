use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role label used for summary enhancement when no job title is set.
pub const DEFAULT_ROLE_LABEL: &str = "Professional";

/// The complete structured resume held by the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    /// Comma separated; only split when rendered.
    pub skills: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// No editor control mutates education; it only has to survive every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub graduation_date: String,
}

impl Experience {
    /// A fresh entry with a new id and every text field empty.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            role: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl ResumeData {
    /// The full name doubles as the "resume is usable" check for scanning.
    pub fn has_name(&self) -> bool {
        !self.full_name.trim().is_empty()
    }

    pub fn role_label(&self) -> &str {
        match self.job_title.trim() {
            "" => DEFAULT_ROLE_LABEL,
            title => title,
        }
    }
}
