//! Persisted tool configuration.
//!
//! One JSON file holds the icon selection, tooling knobs, and the full
//! historical codepoint map. The map only ever grows; entries for icons
//! dropped from the selection are kept so a re-added icon gets its old glyph
//! back (see [`ikoni::assign_codepoints`]).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ikoni::RawCodepoint;
use serde::{Deserialize, Serialize};

use crate::BuildError;

pub const DEFAULT_FONT_NAME: &str = "ikoni-icons";
pub const DEFAULT_SOURCE_DIR: &str = "libraries/bootstrap-icons/icons";
pub const DEFAULT_GENERATOR_COMMAND: &str = "npx fantasticon";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Font family name, also the output filename base.
    pub font_name: String,
    /// Canonical icon names selected for the build, in selection order.
    pub icons: Vec<String>,
    /// Directory containing one `<icon>.svg` per icon.
    pub icons_source_dir: PathBuf,
    /// Command used to run the external font compiler.
    pub generator_command: String,
    /// Full historical icon -> codepoint map, removed icons included.
    pub codepoints: BTreeMap<String, RawCodepoint>,
    /// Cache-busting version of the last successful build, 0 if never built.
    pub version: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_name: DEFAULT_FONT_NAME.into(),
            icons: Vec::new(),
            icons_source_dir: DEFAULT_SOURCE_DIR.into(),
            generator_command: DEFAULT_GENERATOR_COMMAND.into(),
            codepoints: BTreeMap::new(),
            version: 0,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist yet. A file that exists but does not parse is an
    /// error; silently discarding it would lose the codepoint history.
    pub fn load(path: &Path) -> Result<Settings, BuildError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(BuildError::io(path, e)),
        };
        serde_json::from_str(&raw).map_err(|e| BuildError::MalformedSettings {
            path: path.to_owned(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), BuildError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        let json =
            serde_json::to_string_pretty(self).expect("settings always serialize to JSON");
        fs::write(path, json + "\n").map_err(|e| BuildError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.generator_command, DEFAULT_GENERATOR_COMMAND);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.icons = vec!["gear".into(), "star".into()];
        settings
            .codepoints
            .insert("gear".into(), RawCodepoint::Value(0xE001));
        settings
            .codepoints
            .insert("star".into(), RawCodepoint::Text("e002".into()));
        settings.version = 1700000000;

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_an_error_not_a_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, BuildError::MalformedSettings { .. }));
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/settings.json");
        Settings::default().save(&path).unwrap();
        assert!(path.is_file());
    }
}
