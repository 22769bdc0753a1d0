// src/core/html.rs

/// Escape text for HTML element content and double- or single-quoted attributes.
pub fn escape<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap rendered regions into a standalone document.
/// `image` and `results` are already-rendered inner HTML.
pub fn page(title: &str, image: &str, results: &str) -> String {
    let mut out = s!("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(title)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<div id=\"imageDisplay\">{image}</div>\n"));
    out.push_str(&format!("<div id=\"resultsDisplay\">{results}</div>\n"));
    out.push_str("</body>\n</html>\n");
    out
}
