//! End-to-end build through a fake font compiler.
//!
//! Exercises staging, codepoint merging, CSS emission and settings updates
//! without requiring the Node tooling.

use std::fs;

use ikoni_build::builder::Builder;
use ikoni_build::compile::{CompileRequest, FontAssets, FontCompiler};
use ikoni_build::settings::Settings;
use ikoni_build::BuildError;
use tempfile::TempDir;

/// Pretends to compile: writes a dummy WOFF2, no WOFF fallback.
struct FakeCompiler;

impl FontCompiler for FakeCompiler {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<FontAssets, BuildError> {
        fs::create_dir_all(request.output_dir).unwrap();
        let woff2 = request
            .output_dir
            .join(format!("{}.woff2", request.font_name));
        fs::write(&woff2, b"wOF2").unwrap();
        Ok(FontAssets { woff2, woff: None })
    }
}

/// Produces both font flavors, so the CSS carries the WOFF fallback.
struct FakeCompilerWithWoff;

impl FontCompiler for FakeCompilerWithWoff {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<FontAssets, BuildError> {
        fs::create_dir_all(request.output_dir).unwrap();
        let woff2 = request
            .output_dir
            .join(format!("{}.woff2", request.font_name));
        let woff = request.output_dir.join(format!("{}.woff", request.font_name));
        fs::write(&woff2, b"wOF2").unwrap();
        fs::write(&woff, b"wOFF").unwrap();
        Ok(FontAssets {
            woff2,
            woff: Some(woff),
        })
    }
}

fn fixture(icons: &[&str]) -> (TempDir, Settings) {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("icons-src");
    fs::create_dir_all(&source).unwrap();
    for icon in icons {
        fs::write(source.join(format!("{icon}.svg")), "<svg/>").unwrap();
    }
    let mut settings = Settings::default();
    settings.icons = icons.iter().map(|s| s.to_string()).collect();
    settings.icons_source_dir = source;
    (dir, settings)
}

#[test]
fn build_produces_css_and_extends_the_codepoint_map() {
    let (dir, mut settings) = fixture(&["gear", "star"]);
    let compiler = FakeCompiler;
    let builder = Builder::new(&compiler, dir.path().join("work"), dir.path().join("out"));

    let report = builder.build(&mut settings).unwrap();
    assert_eq!(report.glyphs, 2);
    assert_eq!(report.version, settings.version);
    assert_eq!(settings.codepoints.len(), 2);

    let css = fs::read_to_string(&report.css).unwrap();
    assert!(css.contains(".di-gear::before { content: \"\\e001\"; }"));
    assert!(css.contains(".di-star::before { content: \"\\e002\"; }"));
    assert!(css.contains(&format!(
        "url(\"./{}.woff2?v={}\")",
        settings.font_name, report.version
    )));
    // The fake produced no WOFF, so no fallback format.
    assert!(!css.contains("format(\"woff\")"));
}

#[test]
fn woff_fallback_appears_when_the_compiler_produces_one() {
    let (dir, mut settings) = fixture(&["gear"]);
    let compiler = FakeCompilerWithWoff;
    let builder = Builder::new(&compiler, dir.path().join("work"), dir.path().join("out"));

    let report = builder.build(&mut settings).unwrap();
    assert!(report.woff.is_some());
    let css = fs::read_to_string(&report.css).unwrap();
    assert!(css.contains("format(\"woff2\")"));
    assert!(css.contains("format(\"woff\")"));
}

#[test]
fn removed_icons_keep_their_codepoints_but_leave_the_css() {
    let (dir, mut settings) = fixture(&["gear", "star"]);
    let compiler = FakeCompiler;
    let builder = Builder::new(&compiler, dir.path().join("work"), dir.path().join("out"));
    builder.build(&mut settings).unwrap();

    settings.icons = vec!["star".into()];
    let report = builder.build(&mut settings).unwrap();
    assert_eq!(report.glyphs, 1);

    let css = fs::read_to_string(&report.css).unwrap();
    assert!(!css.contains(".di-gear"));
    assert!(css.contains(".di-star::before { content: \"\\e002\"; }"));

    // Historical mapping survives for when the icon comes back.
    assert_eq!(settings.codepoints.len(), 2);

    // Stale staged SVGs from the first run are gone.
    let staged: Vec<String> = fs::read_dir(dir.path().join("work/icons"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(staged, vec!["star.svg"]);
}

#[test]
fn missing_icon_svg_fails_the_build() {
    let (dir, mut settings) = fixture(&["gear"]);
    settings.icons.push("does-not-exist".into());
    let compiler = FakeCompiler;
    let builder = Builder::new(&compiler, dir.path().join("work"), dir.path().join("out"));

    let err = builder.build(&mut settings).unwrap_err();
    assert!(matches!(err, BuildError::IconNotFound { .. }));
}

#[test]
fn empty_selection_is_rejected() {
    let (dir, mut settings) = fixture(&[]);
    let compiler = FakeCompiler;
    let builder = Builder::new(&compiler, dir.path().join("work"), dir.path().join("out"));

    let err = builder.build(&mut settings).unwrap_err();
    assert!(matches!(err, BuildError::NoIcons));
}

#[test]
fn missing_source_dir_is_reported() {
    let (dir, mut settings) = fixture(&["gear"]);
    settings.icons_source_dir = dir.path().join("no-such-dir");
    let compiler = FakeCompiler;
    let builder = Builder::new(&compiler, dir.path().join("work"), dir.path().join("out"));

    let err = builder.build(&mut settings).unwrap_err();
    assert!(matches!(err, BuildError::SourceDirNotFound(_)));
}
