//! Icon webfont build tool.
//!
//! Maintains a selected set of icons with stable codepoints, shells out to an
//! external font compiler for the WOFF2/WOFF files, and writes the matching
//! stylesheet.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ikoni::assign_codepoints;
use ikoni_build::builder::Builder;
use ikoni_build::compile::Fantasticon;
use ikoni_build::form::{save_configuration, FormInput};
use ikoni_build::settings::Settings;
use ikoni_build::snippet::{icon_markup, preview_rows};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file holding the icon selection and codepoint history.
    #[arg(long, default_value = "ikoni.settings.json")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and save a configuration.
    Save {
        /// File with one icon entry per line ("-" for stdin). Entries may be
        /// plain names, classnames, or pasted HTML snippets.
        #[arg(short, long)]
        icons: PathBuf,

        /// Font family name.
        #[arg(long)]
        font_name: Option<String>,

        /// Directory containing one <icon>.svg per icon.
        #[arg(long)]
        source_dir: Option<String>,

        /// Command used to run the font compiler.
        #[arg(long)]
        generator: Option<String>,
    },
    /// Build the font + CSS from the saved configuration.
    Build {
        /// Output directory for the CSS and font files.
        #[arg(short, long, default_value = "public/ikoni")]
        output_dir: PathBuf,

        /// Scratch directory for staged SVGs and the compiler config.
        #[arg(long, default_value = "target/ikoni-work")]
        work_dir: PathBuf,
    },
    /// Show the configuration and whether assets have been built.
    Status {
        /// Output directory to check for built assets.
        #[arg(short, long, default_value = "public/ikoni")]
        output_dir: PathBuf,
    },
    /// List configured icons with classes and codepoints.
    List,
    /// Print the HTML markup for one icon.
    Snippet {
        name: String,

        /// Extra classes to append.
        #[arg(long)]
        class: Vec<String>,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match Settings::load(&args.settings) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Save {
            icons,
            font_name,
            source_dir,
            generator,
        } => {
            let icons_text = match read_icons_text(&icons) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("{}: {e}", icons.display());
                    std::process::exit(1);
                }
            };
            let input = FormInput {
                icons_text,
                font_name: font_name.unwrap_or_else(|| settings.font_name.clone()),
                icons_source_dir: source_dir
                    .unwrap_or_else(|| settings.icons_source_dir.display().to_string()),
                generator_command: generator
                    .unwrap_or_else(|| settings.generator_command.clone()),
            };
            match save_configuration(&input, &mut settings) {
                Ok(_) => {
                    if let Err(e) = settings.save(&args.settings) {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                    println!(
                        "Saved {} icons ({} codepoints tracked). Next: run `ikoni build`.",
                        settings.icons.len(),
                        settings.codepoints.len()
                    );
                }
                Err(errors) => {
                    for error in errors {
                        eprintln!("{}: {}", error.field, error.message);
                    }
                    std::process::exit(1);
                }
            }
        }
        Command::Build {
            output_dir,
            work_dir,
        } => {
            let compiler = Fantasticon::new(&settings.generator_command);
            let builder = Builder::new(&compiler, work_dir, output_dir);
            match builder.build(&mut settings) {
                Ok(report) => {
                    if let Err(e) = settings.save(&args.settings) {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                    println!("Generated icon font + CSS ({} glyphs).", report.glyphs);
                    println!("CSS: {}", report.css.display());
                    println!("WOFF2: {}", report.woff2.display());
                    if let Some(woff) = &report.woff {
                        println!("WOFF: {}", woff.display());
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Status { output_dir } => {
            println!("Font family: {}", settings.font_name);
            println!("Icons: {}", settings.icons.len());
            println!("Codepoints tracked: {}", settings.codepoints.len());
            let css = output_dir.join(format!("{}.css", settings.font_name));
            if css.is_file() {
                println!("Assets: built ({})", css.display());
            } else {
                println!("Assets: not built yet. Run `ikoni build`.");
            }
            if settings.version > 0 {
                println!("Version: {}", settings.version);
            } else {
                println!("Version: n/a");
            }
        }
        Command::List => {
            let codepoints = assign_codepoints(&settings.icons, &settings.codepoints);
            println!(
                "{:<32} {:<36} {:<8} {}",
                "name", "class", "code", "html"
            );
            for row in preview_rows(&settings.icons, &codepoints) {
                println!(
                    "{:<32} {:<36} {:<8} {}",
                    row.name, row.class, row.unicode, row.html
                );
            }
        }
        Command::Snippet { name, class } => {
            let extra: Vec<&str> = class.iter().map(String::as_str).collect();
            println!("{}", icon_markup(&name, &extra));
        }
    }
}

fn read_icons_text(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}
