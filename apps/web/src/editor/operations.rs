//! Pure resume edits. Every operation takes the current record and returns a
//! new one; nothing here mutates in place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Experience, ResumeData};

/// Scalar resume fields exposed by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumeField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Location,
    Summary,
    Skills,
}

impl ResumeField {
    #[cfg(test)]
    pub const ALL: [ResumeField; 7] = [
        ResumeField::FullName,
        ResumeField::JobTitle,
        ResumeField::Email,
        ResumeField::Phone,
        ResumeField::Location,
        ResumeField::Summary,
        ResumeField::Skills,
    ];

    /// Wire name, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            ResumeField::FullName => "fullName",
            ResumeField::JobTitle => "jobTitle",
            ResumeField::Email => "email",
            ResumeField::Phone => "phone",
            ResumeField::Location => "location",
            ResumeField::Summary => "summary",
            ResumeField::Skills => "skills",
        }
    }

    pub fn get(self, resume: &ResumeData) -> &str {
        match self {
            ResumeField::FullName => &resume.full_name,
            ResumeField::JobTitle => &resume.job_title,
            ResumeField::Email => &resume.email,
            ResumeField::Phone => &resume.phone,
            ResumeField::Location => &resume.location,
            ResumeField::Summary => &resume.summary,
            ResumeField::Skills => &resume.skills,
        }
    }

    fn slot(self, resume: &mut ResumeData) -> &mut String {
        match self {
            ResumeField::FullName => &mut resume.full_name,
            ResumeField::JobTitle => &mut resume.job_title,
            ResumeField::Email => &mut resume.email,
            ResumeField::Phone => &mut resume.phone,
            ResumeField::Location => &mut resume.location,
            ResumeField::Summary => &mut resume.summary,
            ResumeField::Skills => &mut resume.skills,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Role,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub fn key(self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Role => "role",
            ExperienceField::StartDate => "startDate",
            ExperienceField::EndDate => "endDate",
            ExperienceField::Description => "description",
        }
    }

    pub fn get(self, entry: &Experience) -> &str {
        match self {
            ExperienceField::Company => &entry.company,
            ExperienceField::Role => &entry.role,
            ExperienceField::StartDate => &entry.start_date,
            ExperienceField::EndDate => &entry.end_date,
            ExperienceField::Description => &entry.description,
        }
    }

    fn slot(self, entry: &mut Experience) -> &mut String {
        match self {
            ExperienceField::Company => &mut entry.company,
            ExperienceField::Role => &mut entry.role,
            ExperienceField::StartDate => &mut entry.start_date,
            ExperienceField::EndDate => &mut entry.end_date,
            ExperienceField::Description => &mut entry.description,
        }
    }
}

/// Replaces exactly one scalar field. Any text is accepted, including empty.
pub fn set_field(resume: &ResumeData, field: ResumeField, value: &str) -> ResumeData {
    let mut next = resume.clone();
    *field.slot(&mut next) = value.to_string();
    next
}

/// Appends a blank entry and returns the new record with the assigned id.
pub fn add_experience(resume: &ResumeData) -> (ResumeData, Uuid) {
    let entry = Experience::blank();
    let id = entry.id;

    let mut experience = resume.experience.clone();
    experience.push(entry);

    (
        ResumeData {
            experience,
            ..resume.clone()
        },
        id,
    )
}

/// Filters out the entry with `id`. Unknown ids leave the list as it was.
pub fn remove_experience(resume: &ResumeData, id: Uuid) -> ResumeData {
    ResumeData {
        experience: resume
            .experience
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect(),
        ..resume.clone()
    }
}

/// Replaces one field of the entry matching `id`; unknown ids are a no-op.
pub fn set_experience_field(
    resume: &ResumeData,
    id: Uuid,
    field: ExperienceField,
    value: &str,
) -> ResumeData {
    ResumeData {
        experience: resume
            .experience
            .iter()
            .map(|e| {
                if e.id == id {
                    let mut updated = e.clone();
                    *field.slot(&mut updated) = value.to_string();
                    updated
                } else {
                    e.clone()
                }
            })
            .collect(),
        ..resume.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Education;

    fn sample_resume() -> ResumeData {
        ResumeData {
            full_name: "Ada Lovelace".to_string(),
            job_title: "Analyst".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 0000 0000".to_string(),
            location: "London, UK".to_string(),
            summary: "Wrote the first published algorithm.".to_string(),
            skills: "Mathematics, Notes".to_string(),
            experience: vec![Experience {
                id: Uuid::new_v4(),
                company: "Analytical Engine Co".to_string(),
                role: "Collaborator".to_string(),
                start_date: "1842".to_string(),
                end_date: "1843".to_string(),
                description: "Translated and annotated.".to_string(),
            }],
            education: vec![Education {
                id: Uuid::new_v4(),
                school: "Home tutoring".to_string(),
                degree: "Mathematics".to_string(),
                graduation_date: "1835".to_string(),
            }],
        }
    }

    #[test]
    fn test_set_field_replaces_only_that_field() {
        let before = sample_resume();
        let after = set_field(&before, ResumeField::Email, "ada@engine.org");

        assert_eq!(after.email, "ada@engine.org");
        assert_eq!(before.email, "ada@example.com");
        assert_eq!(
            ResumeData {
                email: before.email.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn test_every_field_edit_preserves_the_rest() {
        let before = sample_resume();
        for field in ResumeField::ALL {
            let after = set_field(&before, field, "");
            assert_eq!(field.get(&after), "");
            for other in ResumeField::ALL.iter().filter(|f| **f != field) {
                assert_eq!(other.get(&after), other.get(&before), "{:?} changed", other);
            }
            assert_eq!(after.experience, before.experience);
            assert_eq!(after.education, before.education);
        }
    }

    #[test]
    fn test_add_then_remove_restores_list() {
        let before = sample_resume();
        let (added, id) = add_experience(&before);

        assert_eq!(added.experience.len(), 2);
        assert_eq!(added.experience.last().unwrap().id, id);
        assert!(added.experience.last().unwrap().company.is_empty());
        assert_eq!(before.experience.len(), 1);

        let removed = remove_experience(&added, id);
        assert_eq!(removed.experience, before.experience);
        assert_eq!(removed, before);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let (one, first) = add_experience(&ResumeData::default());
        let (two, second) = add_experience(&one);
        let ids: Vec<Uuid> = two.experience.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let before = sample_resume();
        let after = remove_experience(&before, Uuid::new_v4());
        assert_eq!(after.experience.len(), before.experience.len());
        assert_eq!(after, before);
    }

    #[test]
    fn test_set_experience_field_targets_one_entry() {
        let (resume, id) = add_experience(&sample_resume());
        let original_first = resume.experience[0].clone();

        let after = set_experience_field(&resume, id, ExperienceField::Role, "Staff Engineer");
        assert_eq!(after.experience[1].role, "Staff Engineer");
        assert_eq!(after.experience[1].company, "");
        assert_eq!(after.experience[0], original_first);
    }

    #[test]
    fn test_set_experience_field_unknown_id_is_noop() {
        let before = sample_resume();
        let after =
            set_experience_field(&before, Uuid::new_v4(), ExperienceField::Company, "Nowhere");
        assert_eq!(after, before);
    }

    #[test]
    fn test_field_keys_match_serde_names() {
        for field in ResumeField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.key());
        }
        let parsed: ExperienceField = serde_json::from_str(r#""startDate""#).unwrap();
        assert_eq!(parsed, ExperienceField::StartDate);
    }
}
