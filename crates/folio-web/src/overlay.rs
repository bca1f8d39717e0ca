use folio_core::{nav_hint, section, LineKind, Shape};
use web_sys as web;

pub const OVERLAY_ID: &str = "resume-overlay";
pub const STATUS_ID: &str = "shape-info";

const HEADING_STYLE: &str = "color:#4CAF50;font-weight:bold";
const BULLET_STYLE: &str = "padding-left:1em";
const HINT_STYLE: &str = "margin-top:1em;opacity:0.6;font-size:0.85em";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for one resume section.
pub fn section_html(shape: Shape, compact: bool) -> String {
    let content = section(shape);
    let mut html = format!("<h2>{}</h2>", escape(content.title));
    for line in content.lines {
        match LineKind::classify(line) {
            LineKind::Blank => html.push_str("<br>"),
            LineKind::Heading => {
                html.push_str(&format!("<div style=\"{HEADING_STYLE}\">{}</div>", escape(line)))
            }
            LineKind::Bullet => {
                html.push_str(&format!("<div style=\"{BULLET_STYLE}\">{}</div>", escape(line)))
            }
            LineKind::Plain => html.push_str(&format!("<div>{}</div>", escape(line))),
        }
    }
    let hint = escape(&nav_hint(shape, compact)).replace('\n', "<br>");
    html.push_str(&format!("<div style=\"{HINT_STYLE}\">{hint}</div>"));
    html
}

pub fn show_section(overlay: &web::Element, shape: Shape, compact: bool) {
    overlay.set_inner_html(&section_html(shape, compact));
}

#[inline]
pub fn set_status(status: &web::Element, label: &str) {
    status.set_text_content(Some(label));
}
