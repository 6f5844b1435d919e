//! The external font compiler, behind a narrow interface.
//!
//! The build pipeline only sees [`FontCompiler`]; tests substitute a fake,
//! production uses [`Fantasticon`], which shells out to the Node tool of the
//! same name. The compiler's own behavior (SVG parsing, font table
//! generation) is entirely its problem; this module just hands it a config
//! and checks that the promised files showed up.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use ikoni::CodepointMap;
use log::{debug, info};
use serde::Serialize;

use crate::BuildError;

/// One font-compilation request: everything the external tool needs.
#[derive(Clone, Debug)]
pub struct CompileRequest<'a> {
    pub font_name: &'a str,
    /// Directory holding one staged `<icon>.svg` per selected icon.
    pub input_dir: &'a Path,
    /// Scratch directory for the compiler's own files.
    pub work_dir: &'a Path,
    pub output_dir: &'a Path,
    /// Codepoints restricted to the current selection. These values must end
    /// up as the glyph indices in the produced font.
    pub codepoints: &'a CodepointMap,
}

/// Paths of the produced font files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontAssets {
    pub woff2: PathBuf,
    /// Not every compiler configuration produces the WOFF fallback.
    pub woff: Option<PathBuf>,
}

pub trait FontCompiler {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<FontAssets, BuildError>;
}

/// Runs Fantasticon (or a compatible tool) as a subprocess.
pub struct Fantasticon {
    command: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FantasticonConfig<'a> {
    name: &'a str,
    input_dir: &'a Path,
    output_dir: &'a Path,
    font_types: &'a [&'a str],
    asset_types: &'a [&'a str],
    codepoints: &'a CodepointMap,
}

impl Fantasticon {
    pub fn new(command: &str) -> Fantasticon {
        Fantasticon {
            command: command.trim().to_owned(),
        }
    }

    /// Preflight for the default `npx fantasticon` invocation: without
    /// `--no-install`, npx would try an interactive download, which fails
    /// confusingly in CI and production shells.
    fn check_available(&self) -> Result<(), BuildError> {
        if self.command != "npx fantasticon" && !self.command.starts_with("npx fantasticon ") {
            return Ok(());
        }
        let ok = Command::new("npx")
            .args(["--no-install", "fantasticon", "--version"])
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false);
        if ok {
            Ok(())
        } else {
            Err(BuildError::GeneratorUnavailable(
                "fantasticon is not installed locally; run `npm install --save-dev fantasticon` \
                 and verify with `npx --no-install fantasticon --version`"
                    .into(),
            ))
        }
    }
}

impl FontCompiler for Fantasticon {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<FontAssets, BuildError> {
        let mut argv = self.command.split_whitespace();
        let Some(program) = argv.next() else {
            return Err(BuildError::EmptyGeneratorCommand);
        };
        self.check_available()?;

        let config = FantasticonConfig {
            name: request.font_name,
            input_dir: request.input_dir,
            output_dir: request.output_dir,
            font_types: &["woff2", "woff"],
            asset_types: &[],
            codepoints: request.codepoints,
        };
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| BuildError::GenerationFailed(format!("unencodable config: {e}")))?;
        let config_path = request.work_dir.join("fantasticon.config.json");
        fs::write(&config_path, json).map_err(|e| BuildError::io(&config_path, e))?;
        debug!("wrote {}", config_path.display());

        info!("running `{}`", self.command);
        let output = Command::new(program)
            .args(argv)
            .arg("--config")
            .arg(&config_path)
            .output()
            .map_err(|e| {
                BuildError::GenerationFailed(format!("unable to run `{}`: {e}", self.command))
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() {
                stdout
            } else {
                stderr
            };
            return Err(BuildError::GenerationFailed(detail.trim().to_owned()));
        }

        let woff2 = request
            .output_dir
            .join(format!("{}.woff2", request.font_name));
        if !woff2.is_file() {
            return Err(BuildError::MissingWoff2(woff2));
        }
        let woff = request
            .output_dir
            .join(format!("{}.woff", request.font_name));
        let woff = woff.is_file().then_some(woff);

        Ok(FontAssets { woff2, woff })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_rejected() {
        let compiler = Fantasticon::new("   ");
        let request = CompileRequest {
            font_name: "f",
            input_dir: Path::new("in"),
            work_dir: Path::new("work"),
            output_dir: Path::new("out"),
            codepoints: &CodepointMap::new(),
        };
        let err = compiler.compile(&request).unwrap_err();
        assert!(matches!(err, BuildError::EmptyGeneratorCommand));
    }

    #[test]
    fn config_serializes_in_the_expected_shape() {
        let mut cps = CodepointMap::new();
        cps.insert("gear".into(), 0xE001);
        let config = FantasticonConfig {
            name: "my-icons",
            input_dir: Path::new("/tmp/work/icons"),
            output_dir: Path::new("/srv/out"),
            font_types: &["woff2", "woff"],
            asset_types: &[],
            codepoints: &cps,
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(json["name"], "my-icons");
        assert_eq!(json["inputDir"], "/tmp/work/icons");
        assert_eq!(json["fontTypes"][0], "woff2");
        assert_eq!(json["assetTypes"].as_array().unwrap().len(), 0);
        assert_eq!(json["codepoints"]["gear"], 0xE001);
    }
}
