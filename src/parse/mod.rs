//! Field extraction from raw OCR text.
//!
//! Each expected field has an independent pattern searched over the complete
//! text. Patterns do not consume or partition the text, so the same substring
//! may satisfy several fields. Only the first match counts.

use anyhow::Result;
use regex::Regex;
use std::collections::HashMap;

/// Pattern to match a player name: two capitalized words, e.g. "Jordan Clark".
const PLAYER_PATTERN: &str = r"([A-Z][a-z]+\s[A-Z][a-z]+)";

/// Pattern to match the betting line: the first number in the text, with or
/// without a single decimal digit. There is no label anchor, so whichever
/// numeric token appears first textually wins, even if it belongs to another
/// stat.
const LINE_PATTERN: &str = r"(\d+\.\d|\d+)";

/// Patterns for labeled integer stats. Labels are case-sensitive and may be
/// separated from the value by a colon and/or whitespace.
const PACE_PATTERN: &str = r"Pace[:\s]+(\d+)";
const USAGE_PATTERN: &str = r"Usage[:\s]+(\d+)";
const DEF_PATTERN: &str = r"Def[:\s]+(\d+)";

/// The fixed set of fields the extractor knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Player,
    Line,
    Pace,
    Usage,
    Def,
}

impl FieldName {
    /// All fields, in display order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Player,
        FieldName::Line,
        FieldName::Pace,
        FieldName::Usage,
        FieldName::Def,
    ];

    /// Lowercase identifier used in exports and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Line => "line",
            Self::Pace => "pace",
            Self::Usage => "usage",
            Self::Def => "def",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::Player => PLAYER_PATTERN,
            Self::Line => LINE_PATTERN,
            Self::Pace => PACE_PATTERN,
            Self::Usage => USAGE_PATTERN,
            Self::Def => DEF_PATTERN,
        }
    }
}

/// Fields parsed out of one OCR run. Keys are present only when the
/// corresponding pattern matched; values are the raw captured strings.
pub type ParsedFields = HashMap<FieldName, String>;

/// Extracts all known fields from raw OCR text.
///
/// Runs each field's pattern independently over the full text and takes the
/// first match's first capture group verbatim. Zero matches for a field is
/// expected and simply leaves its key absent.
pub fn extract_fields(text: &str) -> Result<ParsedFields> {
    let mut fields = ParsedFields::new();

    for name in FieldName::ALL {
        let regex = Regex::new(name.pattern())?;
        if let Some(captures) = regex.captures(text) {
            if let Some(value) = captures.get(1) {
                fields.insert(name, value.as_str().to_string());
            }
        }
    }

    Ok(fields)
}
