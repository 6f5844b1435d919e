//! Stable codepoint assignment.
//!
//! Every icon keeps the codepoint it was first assigned for as long as the
//! persisted map retains it; rebuilding with the same selection must never
//! move a glyph.

use std::collections::{BTreeMap, HashSet};

/// First codepoint handed out to a brand-new icon (Private Use Area).
pub const CODEPOINT_START: u32 = 0xE001;

/// Icon name -> codepoint, sorted by name for deterministic serialization.
pub type CodepointMap = BTreeMap<String, u32>;

/// A codepoint as it appears in persisted configuration.
///
/// Older or hand-edited configuration may store the value as a string,
/// decimal or hex; both forms are accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum RawCodepoint {
    Value(u32),
    Text(String),
}

impl RawCodepoint {
    /// Decimal first, hex fallback. `None` for anything unusable.
    fn to_u32(&self) -> Option<u32> {
        match self {
            RawCodepoint::Value(v) => Some(*v),
            RawCodepoint::Text(s) => {
                let s = s.trim();
                if let Ok(v) = s.parse::<u32>() {
                    return Some(v);
                }
                let hex = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .or_else(|| s.strip_prefix("U+"))
                    .or_else(|| s.strip_prefix("u+"))
                    .unwrap_or(s);
                u32::from_str_radix(hex, 16).ok()
            }
        }
    }
}

impl From<u32> for RawCodepoint {
    fn from(v: u32) -> Self {
        RawCodepoint::Value(v)
    }
}

/// Assigns stable codepoints for a set of icons.
///
/// Valid `existing` entries are carried forward untouched, pre-existing
/// collisions included; malformed entries are dropped rather than failing
/// the whole map. Icons without a carried-forward entry get the lowest
/// unused value at or above [`CODEPOINT_START`], scanning upward past every
/// value already in use. Duplicate and empty entries of `icons` are ignored.
pub fn assign_codepoints<S: AsRef<str>>(
    icons: &[S],
    existing: &BTreeMap<String, RawCodepoint>,
) -> CodepointMap {
    let mut codepoints = CodepointMap::new();
    let mut used = HashSet::new();

    for (icon, raw) in existing {
        let Some(cp) = raw.to_u32() else { continue };
        if icon.is_empty() || cp == 0 {
            continue;
        }
        codepoints.insert(icon.clone(), cp);
        used.insert(cp);
    }

    let mut next = CODEPOINT_START;
    for icon in icons {
        let icon = icon.as_ref();
        if icon.is_empty() || codepoints.contains_key(icon) {
            continue;
        }
        while used.contains(&next) {
            next += 1;
        }
        codepoints.insert(icon.to_owned(), next);
        used.insert(next);
        next += 1;
    }

    codepoints
}
