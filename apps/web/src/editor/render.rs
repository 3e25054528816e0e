//! Editor form projection. One control per scalar field, one group per
//! experience entry. `static/app.js` wires `data-*` attributes to the JSON API.

use std::fmt::Write;

use crate::editor::operations::{ExperienceField, ResumeField};
use crate::editor::EditorState;
use crate::models::{Experience, ResumeData};
use crate::preview::escape_html;

struct FieldControl {
    field: ResumeField,
    placeholder: &'static str,
    input_type: &'static str,
}

const PERSONAL_INFO: [FieldControl; 5] = [
    FieldControl {
        field: ResumeField::FullName,
        placeholder: "Full Name",
        input_type: "text",
    },
    FieldControl {
        field: ResumeField::JobTitle,
        placeholder: "Job Title (e.g. Software Engineer)",
        input_type: "text",
    },
    FieldControl {
        field: ResumeField::Email,
        placeholder: "Email",
        input_type: "email",
    },
    FieldControl {
        field: ResumeField::Phone,
        placeholder: "Phone",
        input_type: "text",
    },
    FieldControl {
        field: ResumeField::Location,
        placeholder: "Location (City, Country)",
        input_type: "text",
    },
];

const EXPERIENCE_INPUTS: [(ExperienceField, &str); 4] = [
    (ExperienceField::Company, "Company"),
    (ExperienceField::Role, "Role"),
    (ExperienceField::StartDate, "Start Date"),
    (ExperienceField::EndDate, "End Date"),
];

pub fn render_editor(resume: &ResumeData, editor: &EditorState) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="editor-panel">"#);
    html.push_str(concat!(
        r#"<div class="panel-heading"><h2>Resume Editor</h2>"#,
        r#"<a class="export-link" href="/print" target="_blank" rel="noopener">Export PDF</a></div>"#
    ));

    // Personal info
    html.push_str(r#"<section class="editor-section"><h3>Personal Info</h3><div class="field-grid">"#);
    for control in &PERSONAL_INFO {
        let _ = write!(
            html,
            r#"<input type="{ty}" data-field="{key}" placeholder="{ph}" value="{value}">"#,
            ty = control.input_type,
            key = control.field.key(),
            ph = control.placeholder,
            value = escape_html(control.field.get(resume)),
        );
    }
    html.push_str("</div></section>");

    // Summary + enhancement
    let enhance_disabled = editor.is_enhancing() || resume.summary.trim().is_empty();
    let _ = write!(
        html,
        concat!(
            r#"<section class="editor-section"><div class="section-heading"><h3>Professional Summary</h3>"#,
            r#"<button type="button" data-action="enhance"{disabled}>{label}</button></div>"#,
            r#"<textarea data-field="summary" placeholder="Brief professional summary...">{summary}</textarea>"#,
            "</section>"
        ),
        disabled = if enhance_disabled { " disabled" } else { "" },
        label = if editor.is_enhancing() { "Enhancing..." } else { "AI Enhance" },
        summary = escape_html(&resume.summary),
    );

    // Experience
    html.push_str(concat!(
        r#"<section class="editor-section"><div class="section-heading"><h3>Experience</h3>"#,
        r#"<button type="button" data-action="add-experience" title="Add experience">+</button></div>"#
    ));
    for entry in &resume.experience {
        render_experience_group(&mut html, entry);
    }
    html.push_str("</section>");

    // Skills
    let _ = write!(
        html,
        concat!(
            r#"<section class="editor-section"><h3>Skills</h3>"#,
            r#"<textarea data-field="skills" placeholder="Java, React, Team Leadership, Project Management (Comma separated)">{skills}</textarea>"#,
            "</section>"
        ),
        skills = escape_html(&resume.skills),
    );

    html.push_str("</div>");
    html
}

fn render_experience_group(html: &mut String, entry: &Experience) {
    let _ = write!(
        html,
        concat!(
            r#"<div class="experience-group" data-exp-id="{id}">"#,
            r#"<button type="button" class="remove" data-action="remove-experience" data-id="{id}" title="Remove">&times;</button>"#,
            r#"<div class="field-grid">"#
        ),
        id = entry.id,
    );
    for (field, placeholder) in EXPERIENCE_INPUTS {
        let _ = write!(
            html,
            r#"<input data-exp-field="{key}" placeholder="{placeholder}" value="{value}">"#,
            key = field.key(),
            value = escape_html(field.get(entry)),
        );
    }
    let _ = write!(
        html,
        concat!(
            "</div>",
            r#"<textarea data-exp-field="description" placeholder="Description of responsibilities...">{description}</textarea>"#,
            "</div>"
        ),
        description = escape_html(&entry.description),
    );
}
