//! Builds an icon webfont and stylesheet from a configured icon selection.
//!
//! The pure bookkeeping (names, codepoints, CSS) lives in the `ikoni` crate;
//! this crate owns everything with a side effect: the persisted settings
//! file, SVG staging, the external font compiler, and the CLI.

pub mod builder;
pub mod compile;
pub mod form;
pub mod settings;
pub mod snippet;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No icons configured. Save a configuration first.")]
    NoIcons,

    #[error("Icon source directory not found: {}", .0.display())]
    SourceDirNotFound(PathBuf),

    #[error("Icon not found: {name}. Checked: {}", .dir.display())]
    IconNotFound { name: String, dir: PathBuf },

    #[error("Empty generator command")]
    EmptyGeneratorCommand,

    #[error("Generator is not available: {0}")]
    GeneratorUnavailable(String),

    #[error("Font generation failed: {0}")]
    GenerationFailed(String),

    #[error("Expected WOFF2 output not found: {}", .0.display())]
    MissingWoff2(PathBuf),

    #[error("Malformed settings file {}: {source}", .path.display())]
    MalformedSettings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}
