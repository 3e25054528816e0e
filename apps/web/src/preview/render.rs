//! Resume Preview Renderer: a pure projection of `ResumeData` into HTML.

use std::fmt::Write;

use crate::models::ResumeData;

const NAME_PLACEHOLDER: &str = "Your Name";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Splits the comma-separated skills text into trimmed tags.
/// Empty fragments (`"Java,"`, `" , "`) are dropped.
pub fn skill_tags(skills: &str) -> Vec<&str> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Renders the printable resume document (the `#resume-preview` region).
pub fn render_preview(resume: &ResumeData) -> String {
    let mut html = String::new();
    html.push_str(r#"<article id="resume-preview" class="resume-page">"#);

    // Header
    let name = match resume.full_name.trim() {
        "" => NAME_PLACEHOLDER,
        _ => resume.full_name.as_str(),
    };
    html.push_str(r#"<header class="resume-header">"#);
    let _ = write!(html, "<h1>{}</h1>", escape_html(name));
    if !resume.job_title.is_empty() {
        let _ = write!(
            html,
            r#"<p class="resume-title">{}</p>"#,
            escape_html(&resume.job_title)
        );
    }
    let contact: Vec<String> = [&resume.email, &resume.phone, &resume.location]
        .into_iter()
        .filter(|item| !item.is_empty())
        .map(|item| format!("<span>{}</span>", escape_html(item)))
        .collect();
    if !contact.is_empty() {
        let _ = write!(
            html,
            r#"<div class="resume-contact">{}</div>"#,
            contact.join(" &bull; ")
        );
    }
    html.push_str("</header>");

    if !resume.summary.is_empty() {
        html.push_str(r#"<section class="resume-section resume-summary">"#);
        html.push_str("<h2>Professional Summary</h2>");
        let _ = write!(html, "<p>{}</p>", escape_html(&resume.summary));
        html.push_str("</section>");
    }

    if !resume.experience.is_empty() {
        html.push_str(r#"<section class="resume-section resume-experience">"#);
        html.push_str("<h2>Experience</h2>");
        for entry in &resume.experience {
            let _ = write!(
                html,
                concat!(
                    r#"<div class="experience-entry">"#,
                    r#"<div class="experience-heading"><h3>{role}</h3><span class="experience-dates">{start} - {end}</span></div>"#,
                    r#"<div class="experience-company">{company}</div>"#,
                    r#"<p class="experience-description">{description}</p>"#,
                    "</div>"
                ),
                role = escape_html(&entry.role),
                start = escape_html(&entry.start_date),
                end = escape_html(&entry.end_date),
                company = escape_html(&entry.company),
                description = escape_html(&entry.description),
            );
        }
        html.push_str("</section>");
    }

    if !resume.skills.is_empty() {
        html.push_str(r#"<section class="resume-section resume-skills">"#);
        html.push_str("<h2>Skills</h2><div class=\"skill-tags\">");
        for tag in skill_tags(&resume.skills) {
            let _ = write!(html, r#"<span class="skill-tag">{}</span>"#, escape_html(tag));
        }
        html.push_str("</div></section>");
    }

    html.push_str("</article>");
    html
}

/// Standalone export page. Opening it hands the preview to the browser's
/// native print dialog; no file format is produced here.
pub fn render_print_page(resume: &ResumeData) -> String {
    let title = match resume.full_name.trim() {
        "" => "Resume".to_string(),
        name => format!("{} - Resume", escape_html(name)),
    };
    format!(
        concat!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<title>{title}</title>",
            "<link rel=\"stylesheet\" href=\"/static/style.css\">",
            "</head><body class=\"print-body\">{preview}",
            "<script>window.addEventListener('load', () => window.print());</script>",
            "</body></html>"
        ),
        title = title,
        preview = render_preview(resume),
    )
}
