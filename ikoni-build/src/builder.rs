//! The build pipeline: settings in, CSS + font assets out.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ikoni::{assign_codepoints, emit_css, CodepointMap, RawCodepoint};
use log::{debug, info};

use crate::compile::{CompileRequest, FontCompiler};
use crate::settings::Settings;
use crate::BuildError;

/// Result of a successful build.
#[derive(Clone, Debug)]
pub struct BuildReport {
    pub css: PathBuf,
    pub woff2: PathBuf,
    pub woff: Option<PathBuf>,
    pub version: u64,
    pub glyphs: usize,
}

pub struct Builder<'a> {
    compiler: &'a dyn FontCompiler,
    /// Scratch space for staged SVGs and the compiler's config.
    work_dir: PathBuf,
    /// Where the CSS and font files land.
    output_dir: PathBuf,
}

impl<'a> Builder<'a> {
    pub fn new(
        compiler: &'a dyn FontCompiler,
        work_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Builder<'a> {
        Builder {
            compiler,
            work_dir: work_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Runs a full build from `settings`. On success `settings` is updated
    /// in place with the extended codepoint map and the new version; the
    /// caller decides when to persist it.
    pub fn build(&self, settings: &mut Settings) -> Result<BuildReport, BuildError> {
        if settings.icons.is_empty() {
            return Err(BuildError::NoIcons);
        }
        let source_dir = settings.icons_source_dir.clone();
        if !source_dir.is_dir() {
            return Err(BuildError::SourceDirNotFound(source_dir));
        }

        // Keep the full historical mapping, but only emit glyphs (and CSS
        // classes) for the currently configured icon list.
        let all = assign_codepoints(&settings.icons, &settings.codepoints);
        let selected: CodepointMap = settings
            .icons
            .iter()
            .filter_map(|icon| all.get(icon).map(|cp| (icon.clone(), *cp)))
            .collect();
        info!(
            "building {} glyphs as \"{}\"",
            selected.len(),
            settings.font_name
        );

        let input_dir = self.work_dir.join("icons");
        stage_icons(&settings.icons, &input_dir, &source_dir)?;
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| BuildError::io(&self.output_dir, e))?;

        let assets = self.compiler.compile(&CompileRequest {
            font_name: &settings.font_name,
            input_dir: &input_dir,
            work_dir: &self.work_dir,
            output_dir: &self.output_dir,
            codepoints: &selected,
        })?;

        let version = file_version(&assets.woff2);
        let woff2_src = format!("./{}.woff2?v={version}", settings.font_name);
        let woff_src = assets
            .woff
            .as_ref()
            .map(|_| format!("./{}.woff?v={version}", settings.font_name));
        let css = emit_css(
            &settings.font_name,
            &woff2_src,
            woff_src.as_deref(),
            &selected,
        );

        let css_path = self.output_dir.join(format!("{}.css", settings.font_name));
        fs::write(&css_path, css).map_err(|e| BuildError::io(&css_path, e))?;
        info!("wrote {}", css_path.display());

        settings.codepoints = all
            .iter()
            .map(|(k, v)| (k.clone(), RawCodepoint::from(*v)))
            .collect();
        settings.version = version;

        Ok(BuildReport {
            css: css_path,
            woff2: assets.woff2,
            woff: assets.woff,
            version,
            glyphs: selected.len(),
        })
    }
}

/// Copies the selected SVG files into the staging directory, dropping any
/// stale SVGs from a previous run first.
fn stage_icons(icons: &[String], input_dir: &Path, source_dir: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(input_dir).map_err(|e| BuildError::io(input_dir, e))?;
    for entry in fs::read_dir(input_dir).map_err(|e| BuildError::io(input_dir, e))? {
        let entry = entry.map_err(|e| BuildError::io(input_dir, e))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "svg") {
            let _ = fs::remove_file(&path);
        }
    }

    for icon in icons {
        let src = source_dir.join(format!("{icon}.svg"));
        if !src.is_file() {
            return Err(BuildError::IconNotFound {
                name: icon.clone(),
                dir: source_dir.to_owned(),
            });
        }
        let dest = input_dir.join(format!("{icon}.svg"));
        fs::copy(&src, &dest).map_err(|e| BuildError::io(&dest, e))?;
        debug!("staged {icon}");
    }
    Ok(())
}

/// Cache-busting version: mtime of the produced WOFF2, wall clock when the
/// filesystem won't say.
fn file_version(path: &Path) -> u64 {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or_else(|_| SystemTime::now())
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
