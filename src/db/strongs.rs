use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::models::LexiconRef;

/// Look up the lexicon text for `lexicon_ref`. No reference, or no matching
/// row, gives an empty string. Should the table ever carry duplicate numbers
/// the first row returned wins.
pub fn fetch_lexicon_entry(conn: &Connection, lexicon_ref: Option<LexiconRef>) -> Result<String> {
    let Some(lexicon_ref) = lexicon_ref else {
        return Ok(String::new());
    };

    let mut stmt = conn.prepare_cached("SELECT text FROM strongs WHERE num = ?1")?;
    let mut rows = stmt.query([lexicon_ref.get()])?;

    let Some(row) = rows.next()? else {
        tracing::debug!(lexicon_ref = lexicon_ref.get(), "no lexicon entry");
        return Ok(String::new());
    };
    let text: String = row
        .get("text")
        .map_err(|err| Error::from_column("text", err))?;

    if rows.next()?.is_some() {
        tracing::warn!(
            lexicon_ref = lexicon_ref.get(),
            "lexicon number matches several entries, using the first"
        );
    }

    Ok(text)
}
