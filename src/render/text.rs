// src/render/text.rs
// Plain-text sheet for terminals.

use crate::core::sanitize::normalize_ws;

use super::{ Fragment, SpecSheet };

pub fn fragment(f: &Fragment) -> String {
    match f {
        Fragment::Device { title, image_url, .. } => {
            if image_url.is_empty() { format!("{title}\n") } else { format!("{title}\nImage: {image_url}\n") }
        }
        Fragment::Sheet(sheet) => sheet_text(sheet),
        Fragment::Error(msg) => format!("{msg}\n"),
    }
}

pub fn sheet_text(sheet: &SpecSheet) -> String {
    let mut out = format!("{}\n", sheet.heading);
    for section in &sheet.sections {
        out.push('\n');
        out.push_str(&format!("{} {}\n", section.icon(), section.title()));
        let width = section.items.iter().map(|i| i.label.len()).max().unwrap_or(0);
        for item in &section.items {
            // API values often span lines; keep one line per row.
            out.push_str(&format!("  {:<width$}  {}\n", join!(item.label, ":"), normalize_ws(&item.value), width = width + 1));
        }
    }
    out.push('\n');
    out.push_str(sheet.source);
    out.push('\n');
    out
}
