use rusqlite::types::FromSql;
use rusqlite::{params, Connection, Row};

use crate::error::{Error, Result};
use crate::models::{LanguageCode, LexiconRef, VersePart};
use crate::selector::Selector;

const PART_COLUMNS: &str = "orig_sort, orig_text, bsb_sort, bsb_text, lang_code, book, chapter, \
     verse, transliteration, parsing, parsing_full, strongs";

/// Fetch every part the selector covers, grouped by verse number. Ordering
/// inside a verse is left to the assembler; `rowid` only pins it down so
/// equal sort keys come back the same way on every call.
pub fn fetch_parts(conn: &Connection, selector: &Selector) -> Result<Vec<VersePart>> {
    let book = selector.book_id();
    let chapter = selector.chapter_number();

    let mut stmt;
    let mut rows = match selector.range() {
        Some(range) => {
            stmt = conn.prepare_cached(&format!(
                "SELECT {PART_COLUMNS}
                 FROM interlinear
                 WHERE book = ?1 AND chapter = ?2 AND verse BETWEEN ?3 AND ?4
                 ORDER BY verse, rowid"
            ))?;
            stmt.query(params![book, chapter, range.start(), range.end()])?
        }
        None => {
            stmt = conn.prepare_cached(&format!(
                "SELECT {PART_COLUMNS}
                 FROM interlinear
                 WHERE book = ?1 AND chapter = ?2
                 ORDER BY verse, rowid"
            ))?;
            stmt.query(params![book, chapter])?
        }
    };

    let mut parts = Vec::new();
    while let Some(row) = rows.next()? {
        parts.push(part_from_row(row)?);
    }

    tracing::debug!(book, chapter, rows = parts.len(), "fetched interlinear parts");
    Ok(parts)
}

/// Decode one `interlinear` row. Every column goes through a checked
/// conversion; nothing is defaulted.
pub(crate) fn part_from_row(row: &Row<'_>) -> Result<VersePart> {
    let lang_code: String = column(row, "lang_code")?;
    let language = LanguageCode::from_code(&lang_code)
        .ok_or_else(|| Error::malformed("lang_code", format!("unknown code {lang_code:?}")))?;

    Ok(VersePart {
        original_sort: column(row, "orig_sort")?,
        original_text: column(row, "orig_text")?,
        translation_sort: column(row, "bsb_sort")?,
        translation_text: column(row, "bsb_text")?,
        book_id: positive(row, "book")?,
        chapter: positive(row, "chapter")?,
        verse: positive(row, "verse")?,
        transliteration: column(row, "transliteration")?,
        parsing: column(row, "parsing")?,
        parsing_full: column(row, "parsing_full")?,
        lexicon_ref: lexicon_ref(row, "strongs")?,
        language,
    })
}

fn column<T: FromSql>(row: &Row<'_>, name: &'static str) -> Result<T> {
    row.get(name).map_err(|err| Error::from_column(name, err))
}

/// Book, chapter and verse numbers are 1-based.
fn positive(row: &Row<'_>, name: &'static str) -> Result<u32> {
    match column::<u32>(row, name)? {
        0 => Err(Error::malformed(name, "expected a value of at least 1")),
        value => Ok(value),
    }
}

/// NULL and 0 both mean the part has no lexicon entry.
fn lexicon_ref(row: &Row<'_>, name: &'static str) -> Result<Option<LexiconRef>> {
    Ok(column::<Option<u32>>(row, name)?.and_then(LexiconRef::new))
}
