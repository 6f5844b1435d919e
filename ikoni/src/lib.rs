//! Icon webfont bookkeeping.
//!
//! Three pieces cooperate to turn a free-form icon selection into a webfont
//! stylesheet:
//!
//! - [`name`]: parses user input (plain names, class names, pasted HTML) into
//!   canonical icon names;
//! - [`codepoints`]: assigns each name a stable codepoint, preserving every
//!   previously persisted assignment across rebuilds;
//! - [`css`]: renders the deterministic stylesheet mapping icon classes to
//!   glyphs.
//!
//! All of it is pure; persistence and font compilation belong to callers
//! (see the `ikoni-build` crate).

pub mod codepoints;
pub mod css;
pub mod name;

pub use codepoints::{assign_codepoints, CodepointMap, RawCodepoint, CODEPOINT_START};
pub use css::{css_class, emit_css};
pub use name::{extract_icon_names_from_line, normalize_icon_name};
