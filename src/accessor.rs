//! The [`Interlinear`] handle: one read-only connection plus the assemble and
//! project steps run over it. Callers construct it once and pass it to
//! whatever needs scripture text; there is no global instance.

use std::path::Path;

use rusqlite::Connection;

use crate::assemble::assemble;
use crate::config::Config;
use crate::db::{fetch_lexicon_entry, fetch_parts, open_read_only, verify_schema};
use crate::error::Result;
use crate::models::{LexiconRef, Verse, VersePart};
use crate::selector::Selector;
use crate::text::{lines_of, text_of};

#[derive(Debug)]
pub struct Interlinear {
    conn: Connection,
}

impl Interlinear {
    /// Open the database at `path` read-only. Fails with `NotFound` when the
    /// file is missing or is not an interlinear database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = open_read_only(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Open the database a [`Config`] points at.
    pub fn open_with(config: &Config) -> Result<Self> {
        Self::open(config.database_path())
    }

    /// Wrap an existing connection after checking its schema. The accessor
    /// only ever reads through it.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        verify_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Verses the selector covers, in verse order, each with its parts ordered
    /// for the selector's language mode. No match gives an empty list.
    pub fn verses(&self, selector: &Selector) -> Result<Vec<Verse>> {
        let parts = fetch_parts(&self.conn, selector)?;
        let verses = assemble(parts, selector.mode());
        tracing::debug!(
            book = selector.book_id(),
            chapter = selector.chapter_number(),
            verses = verses.len(),
            "assembled verses"
        );
        Ok(verses)
    }

    /// One line of text per selected verse.
    pub fn lines(&self, selector: &Selector) -> Result<Vec<String>> {
        Ok(lines_of(&self.verses(selector)?, selector.mode()))
    }

    /// The selected verses as one space-joined string.
    pub fn text(&self, selector: &Selector) -> Result<String> {
        Ok(text_of(&self.verses(selector)?, selector.mode()))
    }

    /// Lexicon text for a Strong's number, or `""` when there is none.
    pub fn lookup(&self, lexicon_ref: Option<LexiconRef>) -> Result<String> {
        fetch_lexicon_entry(&self.conn, lexicon_ref)
    }

    /// Lexicon text for the word behind `part`.
    pub fn lookup_part(&self, part: &VersePart) -> Result<String> {
        self.lookup(part.lexicon_ref)
    }
}
