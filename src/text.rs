//! Flat text rendering of assembled verses.
//!
//! Parts are joined in the order the assembler left them; nothing here sorts,
//! trims or normalizes token text.

use crate::models::{LanguageMode, Verse};

/// One verse as a single line: the `mode` text of each part, space separated.
pub fn line_of(verse: &Verse, mode: LanguageMode) -> String {
    verse
        .parts()
        .iter()
        .map(|part| mode.text_of(part))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per verse, in input order.
pub fn lines_of(verses: &[Verse], mode: LanguageMode) -> Vec<String> {
    verses.iter().map(|verse| line_of(verse, mode)).collect()
}

/// The whole range flattened into one string. Empty input gives `""`.
pub fn text_of(verses: &[Verse], mode: LanguageMode) -> String {
    lines_of(verses, mode).join(" ")
}
