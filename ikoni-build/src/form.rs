//! Configuration validation, decoupled from any UI.

use ikoni::{assign_codepoints, extract_icon_names_from_line, CodepointMap, RawCodepoint};

use crate::settings::Settings;

/// Raw, unvalidated configuration input.
#[derive(Clone, Debug, Default)]
pub struct FormInput {
    /// Free-form icon list, one logical entry per line. Entries may be plain
    /// names, prefixed classnames, or pasted HTML snippets.
    pub icons_text: String,
    pub font_name: String,
    pub icons_source_dir: String,
    pub generator_command: String,
}

/// A field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> FieldError {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// Validates `input` and applies it to `settings`, assigning codepoints for
/// any newly selected icons. All field errors are reported at once; on
/// failure `settings` is left untouched.
///
/// Returns the full codepoint map after assignment (selection plus retained
/// history).
pub fn save_configuration(
    input: &FormInput,
    settings: &mut Settings,
) -> Result<CodepointMap, Vec<FieldError>> {
    let mut errors = Vec::new();

    let mut icons: Vec<String> = Vec::new();
    for line in input.icons_text.lines() {
        for icon in extract_icon_names_from_line(line) {
            if !icons.contains(&icon) {
                icons.push(icon);
            }
        }
    }
    if icons.is_empty() {
        errors.push(FieldError::new("icons", "No icons provided."));
    }

    let font_name = input.font_name.trim();
    if font_name.is_empty() {
        errors.push(FieldError::new("font_name", "Font family name is required."));
    }

    let icons_source_dir = input.icons_source_dir.trim();
    if icons_source_dir.is_empty() {
        errors.push(FieldError::new(
            "icons_source_dir",
            "Icon source directory is required.",
        ));
    }

    let generator_command = input.generator_command.trim();
    if generator_command.is_empty() {
        errors.push(FieldError::new(
            "generator_command",
            "Generator command is required.",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let codepoints = assign_codepoints(&icons, &settings.codepoints);
    settings.codepoints = codepoints
        .iter()
        .map(|(k, v)| (k.clone(), RawCodepoint::Value(*v)))
        .collect();
    settings.icons = icons;
    settings.font_name = font_name.to_owned();
    settings.icons_source_dir = icons_source_dir.into();
    settings.generator_command = generator_command.to_owned();

    Ok(codepoints)
}
