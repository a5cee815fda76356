//! Fixture database shared by the integration tests. Rows are inserted out of
//! both reading orders so every read path has to re-sort.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tempfile::TempDir;

pub const GENESIS: u32 = 1;
pub const JOHN: u32 = 43;
pub const THIRD_JOHN: u32 = 64;

pub const GENESIS_1_1_ENGLISH: &str = "In the beginning God - created the heavens and the earth.";
pub const GENESIS_1_1_HEBREW: &str =
    "בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים אֵ֥ת הַשָּׁמַ֖יִם וְאֵ֥ת הָאָֽרֶץ׃";
pub const JOHN_1_1_ENGLISH: &str =
    "In [the] beginning was the Word, and the Word was with - God, and the Word was God.";
pub const JOHN_1_1_GREEK: &str =
    "Ἐν ἀρχῇ ἦν ὁ Λόγος καὶ ὁ Λόγος ἦν πρὸς τὸν Θεόν καὶ Θεὸς ἦν ὁ Λόγος";

/// (orig_sort, orig_text, bsb_sort, bsb_text, transliteration, strongs)
type Token = (f64, &'static str, f64, &'static str, &'static str, i64);

const GENESIS_1_1: &[Token] = &[
    (3.0, "אֱלֹהִ֑ים", 2.0, "God", "’ĕ·lō·hîm", 430),
    (1.0, "בְּרֵאשִׁ֖ית", 1.0, "In the beginning", "bə·rê·šîṯ", 7225),
    (4.0, "אֵ֥ת", 3.0, "-", "’êṯ", 853),
    (2.0, "בָּרָ֣א", 4.0, "created", "bā·rā", 1254),
    (7.0, "הָאָֽרֶץ׃", 7.0, "the earth.", "hā·’ā·reṣ", 776),
    (5.0, "הַשָּׁמַ֖יִם", 5.0, "the heavens", "haš·šā·ma·yim", 8064),
    (6.0, "וְאֵ֥ת", 6.0, "and", "wə·’êṯ", 853),
];

const GENESIS_1_2: &[Token] = &[
    (2.0, "הָיְתָ֥ה", 2.0, "was", "hā·yə·ṯāh", 1961),
    (1.0, "וְהָאָ֗רֶץ", 1.0, "Now the earth", "wə·hā·’ā·reṣ", 776),
    (3.0, "תֹ֙הוּ֙", 3.0, "formless", "ṯō·hū", 8414),
    (4.0, "וָבֹ֔הוּ", 4.0, "and void,", "wā·ḇō·hū", 922),
];

const JOHN_1_1: &[Token] = &[
    (14.0, "Θεὸς", 17.0, "God.", "Theos", 2316),
    (1.0, "Ἐν", 1.0, "In", "En", 1722),
    (2.0, "ἀρχῇ", 2.0, "[the] beginning", "archē", 746),
    (3.0, "ἦν", 3.0, "was", "ēn", 1510),
    (16.0, "ὁ", 14.0, "the", "ho", 3588),
    (4.0, "ὁ", 4.0, "the", "ho", 3588),
    (5.0, "Λόγος", 5.0, "Word,", "Logos", 3056),
    (6.0, "καὶ", 6.0, "and", "kai", 2532),
    (7.0, "ὁ", 7.0, "the", "ho", 3588),
    (8.0, "Λόγος", 8.0, "Word", "Logos", 3056),
    (17.0, "Λόγος", 15.0, "Word", "Logos", 3056),
    (9.0, "ἦν", 9.0, "was", "ēn", 1510),
    (10.0, "πρὸς", 10.0, "with", "pros", 4314),
    (11.0, "τὸν", 11.0, "-", "ton", 0),
    (12.0, "Θεόν", 12.0, "God,", "Theon", 2316),
    (13.0, "καὶ", 13.0, "and", "kai", 2532),
    (15.0, "ἦν", 16.0, "was", "ēn", 1510),
];

const STRONGS: &[(i64, &str)] = &[
    (7225, "רֵאשִׁית: beginning, chief"),
    (430, "אֱלֹהִים: God, gods"),
    (853, "אֵת: sign of the definite direct object"),
    (853, "אֵת: duplicate row"),
    (2316, "θεός: God, a god"),
    (3056, "λόγος: a word, speech, divine utterance"),
];

pub struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Build the standard fixture: Genesis 1:1-2, John 1:1, and a fourteen-verse
/// 3 John 1 whose verses are stored back to front within the chapter.
pub fn fixture() -> Result<Fixture> {
    let dir = TempDir::new().context("failed to create temp dir")?;
    let path = dir.path().join("bsb-interlinear.db");
    let conn = Connection::open(&path).context("failed to create fixture database")?;
    create_schema(&conn)?;

    insert_verse(&conn, GENESIS, 1, 1, "H", GENESIS_1_1)?;
    insert_verse(&conn, GENESIS, 1, 2, "H", GENESIS_1_2)?;
    insert_verse(&conn, JOHN, 1, 1, "G", JOHN_1_1)?;

    for verse in (1..=14u32).rev() {
        let first = format!("v{verse}-a");
        let second = format!("v{verse}-b");
        for (orig_sort, bsb_sort, text) in [(2.0, 1.0, &second), (1.0, 2.0, &first)] {
            conn.execute(
                "INSERT INTO interlinear
                 (orig_sort, orig_text, bsb_sort, bsb_text, lang_code, book, chapter, verse,
                  transliteration, parsing, parsing_full, strongs)
                 VALUES (?1, ?2, ?3, ?4, 'G', ?5, 1, ?6, '', '', '', NULL)",
                params![orig_sort, text, bsb_sort, text, THIRD_JOHN, verse],
            )
            .context("failed to insert 3 John row")?;
        }
    }

    for (num, text) in STRONGS {
        conn.execute(
            "INSERT INTO strongs (num, text) VALUES (?1, ?2)",
            params![num, text],
        )
        .context("failed to insert strongs row")?;
    }

    drop(conn);
    Ok(Fixture { _dir: dir, path })
}

/// Build a fixture holding exactly the given raw SQL insert on top of the
/// schema. Used to plant malformed rows.
pub fn fixture_with(sql: &str) -> Result<Fixture> {
    let dir = TempDir::new().context("failed to create temp dir")?;
    let path = dir.path().join("bsb-interlinear.db");
    let conn = Connection::open(&path).context("failed to create fixture database")?;
    create_schema(&conn)?;
    conn.execute_batch(sql).context("failed to insert fixture rows")?;
    drop(conn);
    Ok(Fixture { _dir: dir, path })
}

pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE interlinear (
            orig_sort REAL,
            orig_text TEXT,
            bsb_sort REAL,
            bsb_text TEXT,
            lang_code TEXT,
            book INTEGER,
            chapter INTEGER,
            verse INTEGER,
            transliteration TEXT,
            parsing TEXT,
            parsing_full TEXT,
            strongs INTEGER
        );
        CREATE TABLE strongs (
            num INTEGER,
            text TEXT
        );",
    )
    .context("failed to create fixture schema")
}

fn insert_verse(
    conn: &Connection,
    book: u32,
    chapter: u32,
    verse: u32,
    lang_code: &str,
    tokens: &[Token],
) -> Result<()> {
    for (orig_sort, orig_text, bsb_sort, bsb_text, translit, strongs) in tokens {
        conn.execute(
            "INSERT INTO interlinear
             (orig_sort, orig_text, bsb_sort, bsb_text, lang_code, book, chapter, verse,
              transliteration, parsing, parsing_full, strongs)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, '', '', ?10)",
            params![
                orig_sort, orig_text, bsb_sort, bsb_text, lang_code, book, chapter, verse,
                translit, strongs
            ],
        )
        .with_context(|| format!("failed to insert {book} {chapter}:{verse}"))?;
    }
    Ok(())
}
