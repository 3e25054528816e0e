use crate::editor::render::render_editor;
use crate::preview::render_preview;
use crate::scanner::render::render_scanner;
use crate::shell::{ViewMode, Workspace};

const TABS: [(ViewMode, &str); 2] = [
    (ViewMode::Builder, "Resume Builder"),
    (ViewMode::Scanner, "ATS Scanner"),
];

/// Full page: brand bar, view tabs, and the active view's fragments.
/// Fragment containers carry `data-fragment` so the script can refresh them.
pub fn render_shell(ws: &Workspace) -> String {
    let tabs: String = TABS
        .iter()
        .map(|(mode, label)| {
            let active = if *mode == ws.mode { " active" } else { "" };
            let key = match mode {
                ViewMode::Builder => "builder",
                ViewMode::Scanner => "scanner",
            };
            format!(
                r#"<button type="button" class="tab{active}" data-action="mode" data-mode="{key}">{label}</button>"#
            )
        })
        .collect();

    let main = match ws.mode {
        ViewMode::Builder => format!(
            concat!(
                r#"<div class="builder-layout">"#,
                r#"<div id="editor" class="no-print" data-fragment="/fragments/editor">{editor}</div>"#,
                r#"<div id="preview" data-fragment="/fragments/preview">{preview}</div>"#,
                "</div>"
            ),
            editor = render_editor(&ws.resume, &ws.editor),
            preview = render_preview(&ws.resume),
        ),
        ViewMode::Scanner => format!(
            concat!(
                r#"<div class="scanner-layout"><h1>Resume Scanner</h1>"#,
                "<p>Optimize your resume for specific job descriptions using Gemini AI.</p>",
                r#"<div id="scanner" data-fragment="/fragments/scanner">{scanner}</div>"#,
                "</div>"
            ),
            scanner = render_scanner(&ws.scanner, &ws.resume),
        ),
    };

    format!(
        concat!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>ResuMatch.AI</title>",
            "<link rel=\"stylesheet\" href=\"/static/style.css\">",
            "</head><body>",
            "<nav class=\"topbar no-print\"><span class=\"brand\">ResuMatch<span>.AI</span></span>",
            "<div class=\"tabs\">{tabs}</div></nav>",
            "<main>{main}</main>",
            "<script src=\"/static/app.js\"></script>",
            "</body></html>"
        ),
        tabs = tabs,
        main = main,
    )
}
