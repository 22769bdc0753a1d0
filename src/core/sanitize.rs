// src/core/sanitize.rs
use crate::config::consts::{ DEFAULT_FILE, MISSING_VALUE };

/// Trim a raw query; `None` if nothing is left.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let q = raw.trim();
    if q.is_empty() { None } else { Some(q) }
}

/// A spec value worth showing: present, non-empty, and not exactly the `"-"`
/// sentinel. Padded values are kept as sent.
pub fn present(value: Option<&str>) -> Option<&str> {
    let v = value?;
    if v.is_empty() || v == MISSING_VALUE { None } else { Some(v) }
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File-system friendly stem for a device title; `device` if nothing survives.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' || ch=='.' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(DEFAULT_FILE) } else { out }
}
