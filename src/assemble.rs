//! Grouping of verse-ordered token rows into [`Verse`] records.
//!
//! The store hands rows back grouped by verse number, but the order inside a
//! verse follows neither language: the original and English alignment tables
//! are numbered independently. So every verse gets re-sorted here for the mode
//! the caller asked for, and nothing is ever re-sorted across verse
//! boundaries.

use crate::models::{sort_parts, LanguageMode, Verse, VersePart};

/// Collapse contiguous runs of same-verse rows into verses, each ordered by
/// `mode`'s sort key. Empty input gives an empty list.
pub fn assemble<I>(rows: I, mode: LanguageMode) -> Vec<Verse>
where
    I: IntoIterator<Item = VersePart>,
{
    let mut verses = Vec::new();
    let mut buffer: Vec<VersePart> = Vec::new();

    for row in rows {
        let starts_new_verse = buffer
            .first()
            .is_some_and(|current| current.verse != row.verse);
        if starts_new_verse {
            flush(&mut buffer, mode, &mut verses);
        }
        buffer.push(row);
    }
    flush(&mut buffer, mode, &mut verses);

    verses
}

fn flush(buffer: &mut Vec<VersePart>, mode: LanguageMode, verses: &mut Vec<Verse>) {
    let mut parts = std::mem::take(buffer);
    sort_parts(&mut parts, mode);
    // `Verse::new` only refuses an empty buffer, which is the end-of-stream
    // flush after no rows at all.
    if let Some(verse) = Verse::new(parts) {
        verses.push(verse);
    }
}
