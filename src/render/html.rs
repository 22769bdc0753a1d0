// src/render/html.rs
use crate::core::html::escape;

use super::{ Fragment, SpecSection, SpecSheet };

pub fn fragment(f: &Fragment) -> String {
    match f {
        Fragment::Device { title, image_url, fallback_url } => device(title, image_url, fallback_url),
        Fragment::Sheet(sheet) => sheet_html(sheet),
        Fragment::Error(msg) => error(msg),
    }
}

/// Title + picture; the browser swaps to `fallback_url` if the picture fails.
pub fn device(title: &str, image_url: &str, fallback_url: &str) -> String {
    let t = escape(title);
    format!(
        "<h2>{t}</h2><img src=\"{src}\" alt=\"{t}\" class=\"device-image\" \
         onerror=\"this.onerror=null;this.src='{fb}';\" />",
        src = escape(image_url),
        fb = escape(fallback_url),
    )
}

pub fn error(message: &str) -> String {
    format!("<div class=\"error-message\">{}</div>", escape(message))
}

pub fn sheet_html(sheet: &SpecSheet) -> String {
    let mut out = format!("<h2>{}</h2><div class=\"spec-container\">", escape(&sheet.heading));
    for section in &sheet.sections {
        out.push_str(&section_html(section));
    }
    out.push_str(&format!("</div><p class=\"source-info\">{}</p>", escape(sheet.source)));
    out
}

fn section_html(section: &SpecSection) -> String {
    let mut items = s!();
    for item in &section.items {
        items.push_str(&format!(
            "<li class=\"spec-item\"><strong>{}:</strong> {}</li>",
            escape(item.label),
            escape(&item.value)
        ));
    }
    format!(
        "<div class=\"spec-group\"><div class=\"spec-title\">{} {}</div><ul>{}</ul></div>",
        section.icon(),
        section.title(),
        items
    )
}
