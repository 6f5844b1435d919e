//! Deterministic stylesheet emission.
//!
//! Same map in, same bytes out: consumers compare CSS output across builds,
//! so iteration order and formatting are fixed. The hex escapes emitted here
//! must match the codepoints handed to the font compiler for the same icons.

use crate::codepoints::CodepointMap;

/// Converts an icon name into a CSS-safe class token.
///
/// Separator characters become hyphens, anything else invalid in a CSS
/// identifier is dropped, and the result is lowercased.
pub fn css_class(name: &str) -> String {
    let mut class = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        match ch {
            ' ' | '_' | '/' | '[' => class.push('-'),
            ']' => {}
            c if c.is_ascii_alphanumeric() || c == '-' => class.push(c.to_ascii_lowercase()),
            _ => {}
        }
    }
    class
}

/// Renders the stylesheet that exposes icon classes as `::before` glyphs.
///
/// `woff2_src` and `woff_src` are emitted verbatim as `url()` values; a
/// `None` WOFF source omits that fallback from `src` entirely. Glyph rules
/// come out in the map's key order.
pub fn emit_css(
    font_family: &str,
    woff2_src: &str,
    woff_src: Option<&str>,
    codepoints: &CodepointMap,
) -> String {
    let family = font_family.replace('"', "'");
    let mut css: Vec<String> = Vec::new();

    css.push("@font-face {".into());
    css.push("  font-display: block;".into());
    css.push(format!("  font-family: \"{family}\";"));
    match woff_src {
        Some(woff) => css.push(format!(
            "  src: url(\"{woff2_src}\") format(\"woff2\"), url(\"{woff}\") format(\"woff\");"
        )),
        None => css.push(format!("  src: url(\"{woff2_src}\") format(\"woff2\");")),
    }
    css.push("  font-weight: normal;".into());
    css.push("  font-style: normal;".into());
    css.push("}".into());
    css.push(String::new());

    // Bootstrap-icons style selectors.
    css.push(".di::before,".into());
    css.push("[class^=\"di-\"]::before,".into());
    css.push("[class*=\" di-\"]::before {".into());
    css.push("  display: inline-block;".into());
    css.push(format!("  font-family: \"{family}\" !important;"));
    css.push("  font-style: normal;".into());
    css.push("  font-weight: normal !important;".into());
    css.push("  font-variant: normal;".into());
    css.push("  text-transform: none;".into());
    css.push("  line-height: 1;".into());
    css.push("  vertical-align: -0.125em;".into());
    css.push("  -webkit-font-smoothing: antialiased;".into());
    css.push("  -moz-osx-font-smoothing: grayscale;".into());
    css.push("}".into());

    for (icon, cp) in codepoints {
        css.push(format!(
            ".di-{}::before {{ content: \"\\{cp:x}\"; }}",
            css_class(icon)
        ));
    }

    css.join("\n") + "\n"
}
