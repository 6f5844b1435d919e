//! HTML helpers mirroring the generated CSS classes.

use ikoni::{css_class, normalize_icon_name, CodepointMap};

/// Renders an inline icon element:
/// `<span class="di di-star" aria-hidden="true"></span>`.
///
/// Extra classes are appended after the icon class; whitespace inside them
/// splits into separate classes. An empty name renders nothing.
pub fn icon_markup(name: &str, extra_classes: &[&str]) -> String {
    let name = normalize_icon_name(name);
    if name.is_empty() {
        return String::new();
    }

    let mut classes = vec!["di".to_owned(), format!("di-{}", css_class(&name))];
    for class in extra_classes {
        classes.extend(class.split_whitespace().map(str::to_owned));
    }

    format!(
        "<span class=\"{}\" aria-hidden=\"true\"></span>",
        escape_attr(&classes.join(" "))
    )
}

/// One row of the icon preview listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRow {
    pub name: String,
    pub class: String,
    pub html: String,
    /// `U+XXXX`, empty when the icon has no codepoint yet.
    pub unicode: String,
    /// CSS escape (`\exxx`), empty when the icon has no codepoint yet.
    pub css_escape: String,
}

/// Preview data for the configured icons against `codepoints`.
pub fn preview_rows(icons: &[String], codepoints: &CodepointMap) -> Vec<PreviewRow> {
    icons
        .iter()
        .map(|icon| normalize_icon_name(icon))
        .filter(|icon| !icon.is_empty())
        .map(|icon| {
            let class = format!("di-{}", css_class(&icon));
            let (unicode, css_escape) = match codepoints.get(&icon) {
                Some(&cp) => (format!("U+{cp:04X}"), format!("\\{cp:04x}")),
                None => (String::new(), String::new()),
            };
            let html = icon_markup(&icon, &[]);
            PreviewRow {
                name: icon,
                class,
                html,
                unicode,
                css_escape,
            }
        })
        .collect()
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn basic_markup() {
        assert_eq!(
            icon_markup("star", &[]),
            "<span class=\"di di-star\" aria-hidden=\"true\"></span>"
        );
    }

    #[test]
    fn prefixed_names_are_normalized() {
        assert_eq!(icon_markup("bi-star", &[]), icon_markup("star", &[]));
    }

    #[test]
    fn extra_classes_appended_and_split() {
        assert_eq!(
            icon_markup("star", &["fs-4 text-danger"]),
            "<span class=\"di di-star fs-4 text-danger\" aria-hidden=\"true\"></span>"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let html = icon_markup("star", &["\"><script>"]);
        assert!(!html.contains("\"><script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn empty_name_renders_nothing() {
        assert_eq!(icon_markup("  ", &[]), "");
    }

    #[test]
    fn preview_rows_include_unicode_and_css_escape() {
        let mut cps = CodepointMap::new();
        cps.insert("gear".into(), 0xE001);
        let rows = preview_rows(&["gear".into(), "unassigned".into()], &cps);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "gear");
        assert_eq!(rows[0].class, "di-gear");
        assert_eq!(rows[0].unicode, "U+E001");
        assert_eq!(rows[0].css_escape, "\\e001");

        assert_eq!(rows[1].unicode, "");
        assert_eq!(rows[1].css_escape, "");
    }
}
