//! Canonical icon-name parsing.
//!
//! Icon lists accept plain names, prefixed class names, and pasted HTML
//! snippets; everything funnels through here into the prefix-free form used
//! as the stable key across rebuilds.

use std::sync::OnceLock;

use regex::Regex;

/// Matches any `bi-*` classname occurrence (works for HTML, class lists, etc).
fn bi_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bbi-([a-z0-9-]+)\b").unwrap())
}

/// Normalizes an icon name to its canonical form: trimmed, leading dots
/// removed, and any `di-`/`ci-`/`bi-` prefix stripped.
pub fn normalize_icon_name(name: &str) -> String {
    let name = name.trim().trim_start_matches('.');
    // Allow users to paste generated classnames too.
    let name = name.strip_prefix("di-").unwrap_or(name);
    let name = name.strip_prefix("ci-").unwrap_or(name);
    let name = name.strip_prefix("bi-").unwrap_or(name);
    name.to_owned()
}

/// Extracts one or more icon names from a free-form line.
///
/// Supports inputs like:
/// - `arrow-down-left-square`
/// - `bi-arrow-down-left-square`
/// - `bi bi-arrow-down-left-square`
/// - `<i class="bi bi-arrow-down-left-square"></i>`
///
/// Returns canonical names in first-seen order without duplicates. A line
/// with no `bi-*` classname is treated as a single icon identifier. Blank
/// input yields an empty vec; there are no error cases.
pub fn extract_icon_names_from_line(line: &str) -> Vec<String> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    let mut icons = Vec::new();
    for caps in bi_class_re().captures_iter(line) {
        let icon = normalize_icon_name(&format!("bi-{}", &caps[1]));
        if !icon.is_empty() && !icons.contains(&icon) {
            icons.push(icon);
        }
    }
    if !icons.is_empty() {
        return icons;
    }

    // Fallback: treat the whole line as a single icon identifier.
    let icon = normalize_icon_name(line);
    if icon.is_empty() {
        Vec::new()
    } else {
        vec![icon]
    }
}
