//! Query input: which book, chapter and verses to read, and in which language.

use crate::error::{Error, Result};
use crate::models::LanguageMode;

/// Inclusive verse bounds. `start == end` selects exactly one verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    start: u32,
    end: u32,
}

impl VerseRange {
    /// Both ends are included, so `VerseRange::new(1, 3)` reads verses 1, 2
    /// and 3.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start == 0 {
            return Err(Error::invalid_selector("verse numbers start at 1"));
        }
        if start > end {
            return Err(Error::invalid_selector(format!(
                "verse range {start}-{end} ends before it starts"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn single(verse: u32) -> Result<Self> {
        Self::new(verse, verse)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, verse: u32) -> bool {
        (self.start..=self.end).contains(&verse)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Parameters shared by every read on [`crate::Interlinear`].
pub struct Selector {
    book_id: u32,
    chapter: u32,
    verses: Option<VerseRange>,
    mode: LanguageMode,
}

impl Selector {
    /// Select a whole chapter in the default (translation) mode.
    pub fn chapter(book_id: u32, chapter: u32) -> Result<Self> {
        if book_id == 0 {
            return Err(Error::invalid_selector("book ids start at 1"));
        }
        if chapter == 0 {
            return Err(Error::invalid_selector("chapter numbers start at 1"));
        }
        Ok(Self {
            book_id,
            chapter,
            verses: None,
            mode: LanguageMode::default(),
        })
    }

    /// Select an inclusive verse range within a chapter.
    pub fn verses(book_id: u32, chapter: u32, start: u32, end: u32) -> Result<Self> {
        Ok(Self::chapter(book_id, chapter)?.with_range(VerseRange::new(start, end)?))
    }

    /// Select a single verse.
    pub fn verse(book_id: u32, chapter: u32, verse: u32) -> Result<Self> {
        Self::verses(book_id, chapter, verse, verse)
    }

    pub fn with_range(mut self, range: VerseRange) -> Self {
        self.verses = Some(range);
        self
    }

    pub fn with_mode(mut self, mode: LanguageMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn book_id(&self) -> u32 {
        self.book_id
    }

    pub fn chapter_number(&self) -> u32 {
        self.chapter
    }

    /// `None` means the whole chapter.
    pub fn range(&self) -> Option<VerseRange> {
        self.verses
    }

    pub fn mode(&self) -> LanguageMode {
        self.mode
    }
}
