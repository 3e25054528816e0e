//! Scanner view projection: job description input, scan control, error box
//! and the analysis report (gauge, skill-gap chart, keyword chips, suggestions).

use std::fmt::Write;

use crate::models::{AnalysisResult, ResumeData};
use crate::preview::escape_html;
use crate::scanner::state::{ScanPhase, ScannerState, ScoreBand};

// Gauge ring geometry (SVG user units).
const GAUGE_RADIUS: f64 = 54.0;
const GAUGE_STROKE: f64 = 10.0;

pub fn render_scanner(scanner: &ScannerState, resume: &ResumeData) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="scanner-panel"><section class="scanner-input">"#);
    html.push_str("<h2>ATS Scanner</h2>");
    html.push_str(
        "<p>Paste the job description below. We will analyze your current resume (from the Builder tab) against it.</p>",
    );
    let _ = write!(
        html,
        concat!(
            r#"<label for="job-description">Job Description</label>"#,
            r#"<textarea id="job-description" data-scanner="job-description" placeholder="Paste the full job description here...">{jd}</textarea>"#,
            r#"<div class="scan-actions"><button type="button" data-action="scan"{disabled}>{label}</button></div>"#
        ),
        jd = escape_html(&scanner.job_description),
        disabled = if scanner.can_scan(resume) { "" } else { " disabled" },
        label = if scanner.is_scanning() { "Analyzing..." } else { "Scan Resume" },
    );
    if let Some(failure) = scanner.failure() {
        let _ = write!(
            html,
            r#"<div class="scan-error" role="alert">{}</div>"#,
            escape_html(&failure.message)
        );
    }
    html.push_str("</section>");

    if let ScanPhase::Success {
        result,
        completed_at,
    } = &scanner.phase
    {
        html.push_str(&render_report(result));
        let _ = write!(
            html,
            r#"<p class="scan-timestamp">Scanned at {}</p>"#,
            completed_at.format("%Y-%m-%d %H:%M UTC")
        );
    }

    html.push_str("</div>");
    html
}

/// Renders the analysis report for a successful scan.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="scan-report">"#);

    render_gauge(&mut html, result);

    // Skill-gap breakdown
    html.push_str(r#"<section class="report-card skill-gaps"><h3>Detailed Breakdown</h3>"#);
    for gap in &result.skill_gap_analysis {
        let _ = write!(
            html,
            concat!(
                r#"<div class="skill-gap-row"><span class="skill-gap-category">{category}</span>"#,
                r#"<div class="skill-gap-track"><div class="skill-gap-bar" style="width: {score}%"></div></div>"#,
                r#"<span class="skill-gap-score">{score}</span></div>"#
            ),
            category = escape_html(&gap.category),
            score = gap.score,
        );
    }
    html.push_str("</section>");

    // Missing keywords
    html.push_str(r#"<section class="report-card missing-keywords"><h3>Missing Keywords</h3>"#);
    if result.missing_keywords.is_empty() {
        html.push_str(r#"<p class="empty-note">No critical keywords missing!</p>"#);
    } else {
        html.push_str(r#"<div class="chips">"#);
        for keyword in &result.missing_keywords {
            let _ = write!(
                html,
                r#"<span class="keyword-chip">{}</span>"#,
                escape_html(keyword)
            );
        }
        html.push_str("</div>");
    }
    html.push_str("</section>");

    // Suggestions
    html.push_str(r#"<section class="report-card suggestions"><h3>AI Recommendations</h3><ol>"#);
    for suggestion in &result.suggestions {
        let _ = write!(html, "<li>{}</li>", escape_html(suggestion));
    }
    html.push_str("</ol></section>");

    html.push_str("</div>");
    html
}

fn render_gauge(html: &mut String, result: &AnalysisResult) {
    let color = ScoreBand::for_score(result.score).hex();
    let circumference = 2.0 * std::f64::consts::PI * GAUGE_RADIUS;
    let filled = circumference * f64::from(result.score) / 100.0;
    let size = 2.0 * (GAUGE_RADIUS + GAUGE_STROKE);
    let center = size / 2.0;

    let _ = write!(
        html,
        concat!(
            r#"<section class="report-card score-card"><h3>Match Score</h3>"#,
            r#"<svg class="score-gauge" viewBox="0 0 {size} {size}" data-score="{score}">"#,
            r##"<circle cx="{c}" cy="{c}" r="{r}" fill="none" stroke="#e2e8f0" stroke-width="{w}"/>"##,
            r#"<circle cx="{c}" cy="{c}" r="{r}" fill="none" stroke="{color}" stroke-width="{w}" stroke-linecap="round" "#,
            r#"stroke-dasharray="{filled:.2} {circ:.2}" transform="rotate(-90 {c} {c})"/>"#,
            "</svg>",
            r#"<div class="score-value" style="color: {color}">{score}%</div>"#,
            r#"<p class="match-summary">{summary}</p></section>"#
        ),
        size = size,
        c = center,
        r = GAUGE_RADIUS,
        w = GAUGE_STROKE,
        color = color,
        filled = filled,
        circ = circumference,
        score = result.score,
        summary = escape_html(&result.match_summary),
    );
}
