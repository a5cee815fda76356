//! Read-only access to the Berean interlinear Bible database.
//!
//! Token rows for a book and chapter are fetched from SQLite, grouped into
//! verses, and ordered either the way the Hebrew/Greek reads or the way the
//! English translation reads. The resulting verses can be rendered as lines or
//! as one flat string.
//!
//! ```no_run
//! use berean_interlinear::{Interlinear, LanguageMode, Selector};
//!
//! # fn main() -> berean_interlinear::Result<()> {
//! let bible = Interlinear::open("bsb-interlinear.db")?;
//! let selector = Selector::verse(43, 1, 1)?;
//! println!("{}", bible.text(&selector)?);
//! println!("{}", bible.text(&selector.with_mode(LanguageMode::Original))?);
//! # Ok(())
//! # }
//! ```
pub mod accessor;
pub mod assemble;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod selector;
pub mod text;

/// The handle most callers start from.
pub use accessor::Interlinear;

pub use assemble::assemble;
pub use config::{Config, DATABASE_ENV_VAR};
pub use error::{Error, Result};
pub use models::{LanguageCode, LanguageMode, LexiconRef, Verse, VersePart};
pub use selector::{Selector, VerseRange};
pub use text::{line_of, lines_of, text_of};
