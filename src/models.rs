//! Domain models that mirror the `interlinear` table and get handed to callers.
//! These types stay plain data holders: the assembler decides their order and
//! the projector decides how they read, so nothing here talks to SQLite.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

/// Which side of the interlinear a caller wants to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageMode {
    /// Hebrew/Aramaic or Greek text in its own reading order.
    Original,
    /// Berean Standard Bible text in English reading order.
    #[default]
    Translation,
}

impl LanguageMode {
    /// Total order on the sort key this mode reads by.
    pub fn compare(self, lhs: &VersePart, rhs: &VersePart) -> Ordering {
        match self {
            LanguageMode::Original => lhs.original_sort.total_cmp(&rhs.original_sort),
            LanguageMode::Translation => lhs.translation_sort.total_cmp(&rhs.translation_sort),
        }
    }

    /// The text field of `part` this mode renders.
    pub fn text_of(self, part: &VersePart) -> &str {
        match self {
            LanguageMode::Original => &part.original_text,
            LanguageMode::Translation => &part.translation_text,
        }
    }
}

/// Original-language family of a verse, stored as `lang_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    /// `H`: Hebrew and Aramaic (Old Testament).
    Hebrew,
    /// `G`: Koine Greek (New Testament).
    Greek,
}

impl LanguageCode {
    /// Parse the single-letter code used by the dataset.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "H" => Some(LanguageCode::Hebrew),
            "G" => Some(LanguageCode::Greek),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            LanguageCode::Hebrew => "H",
            LanguageCode::Greek => "G",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Key into the `strongs` lexicon table. Zero is not representable: the
/// dataset uses it for "no entry", which decodes to `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexiconRef(NonZeroU32);

impl LexiconRef {
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(LexiconRef)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for LexiconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One aligned unit of a verse: an original-language word and the English
/// rendering it maps to, plus the word-study columns that travel with it.
pub struct VersePart {
    /// Position in original-language reading order.
    pub original_sort: f64,
    pub original_text: String,
    /// Position in English reading order. Built independently of
    /// `original_sort`, so the two rarely agree.
    pub translation_sort: f64,
    pub translation_text: String,
    pub book_id: u32,
    pub chapter: u32,
    pub verse: u32,
    pub transliteration: String,
    /// Abbreviated morphological parsing, e.g. `V-AIA-3S`.
    pub parsing: String,
    /// Spelled-out morphological parsing.
    pub parsing_full: String,
    pub lexicon_ref: Option<LexiconRef>,
    pub language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq)]
/// All parts sharing one (book, chapter, verse) key, ordered for one
/// `LanguageMode`.
pub struct Verse {
    pub book_id: u32,
    pub chapter: u32,
    pub verse: u32,
    pub language: LanguageCode,
    parts: Vec<VersePart>,
}

impl Verse {
    /// Wrap already-ordered parts. The reference and language come from the
    /// first part, so an empty list yields `None`.
    pub fn new(parts: Vec<VersePart>) -> Option<Self> {
        let first = parts.first()?;
        Some(Self {
            book_id: first.book_id,
            chapter: first.chapter,
            verse: first.verse,
            language: first.language,
            parts,
        })
    }

    pub fn parts(&self) -> &[VersePart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<VersePart> {
        self.parts
    }

    /// Re-order the parts in place for `mode` and hand them back. Useful when a
    /// caller already holds a verse assembled for the other mode.
    pub fn sort_parts(&mut self, mode: LanguageMode) -> &[VersePart] {
        sort_parts(&mut self.parts, mode);
        &self.parts
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book_id, self.chapter, self.verse)
    }
}

/// Stable sort by the key `mode` reads in; equal keys keep their row order.
pub(crate) fn sort_parts(parts: &mut [VersePart], mode: LanguageMode) {
    parts.sort_by(|lhs, rhs| mode.compare(lhs, rhs));
}
