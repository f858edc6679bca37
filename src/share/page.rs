//! Standalone HTML page for a shared note

use html_escape::encode_text;

use crate::types::SharedNote;

const STYLE: &str = "body{font-family:system-ui,sans-serif;background:#f9fafb;margin:0}\
main{max-width:48rem;margin:2rem auto;background:#fff;border-radius:.5rem;\
box-shadow:0 1px 3px rgba(0,0,0,.1);padding:1.5rem}\
h1{font-size:1.5rem;margin-top:0}\
ul.tags{list-style:none;padding:0;display:flex;gap:.5rem;flex-wrap:wrap}\
ul.tags li{background:#eef2ff;border-radius:9999px;padding:.1rem .6rem;font-size:.85rem}\
footer{margin-top:1.5rem;padding-top:1rem;border-top:1px solid #e5e7eb;color:#6b7280;font-size:.85rem}";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title} - NoteCraft</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<main>\n{body}\n<footer>Shared via NoteCraft</footer>\n</main>\n</body>\n</html>\n"
    )
}

/// Render a shared note. Every note field is HTML-escaped; line breaks in
/// the content become `<br>`.
pub fn render_note_page(note: &SharedNote) -> String {
    let title = encode_text(&note.title);
    let content = encode_text(&note.content).replace("\r\n", "\n").replace('\n', "<br>\n");

    let mut body = format!("<h1>{}</h1>\n", title);
    if !note.tags.is_empty() {
        body.push_str("<ul class=\"tags\">");
        for tag in &note.tags {
            body.push_str(&format!("<li>{}</li>", encode_text(tag)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str(&format!("<div class=\"content\">{}</div>\n", content));
    body.push_str(&format!(
        "<p class=\"meta\">Shared {}</p>",
        note.shared_at.format("%Y-%m-%d %H:%M UTC")
    ));

    page(&title, &body)
}

/// Page served for an unknown share id
pub fn render_not_found_page() -> String {
    page(
        "Note not found",
        "<h1>Note not found</h1>\n<p>This shared note does not exist or is no longer available.</p>",
    )
}
