// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
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

/// File stem from a display title: ASCII alphanumerics kept, whitespace
/// runs become one `_`, `-`/`_` kept, everything else dropped.
/// Falls back to `table_<ix>` when nothing survives.
pub fn sanitize_filename(name: &str, ix: usize) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in normalize_ws(name).chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch.to_ascii_lowercase()); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { format!("table_{ix}") } else { out }
}
