//! Error taxonomy for the interlinear accessor.
//!
//! Opening the database is the only place `NotFound` can surface. Everything
//! after that is either a selector the caller got wrong, a row that does not
//! decode into its declared type, or SQLite itself failing mid-query. Empty
//! matches are never errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The database file is missing, cannot be opened read-only, or lacks one
    /// of the tables the accessor reads from.
    #[error("interlinear database not found at {}: {reason}", .path.display())]
    NotFound { path: PathBuf, reason: String },

    /// A fetched column could not be converted to the type it is declared as.
    #[error("malformed `{column}` column: {reason}")]
    MalformedRow { column: &'static str, reason: String },

    /// The selector names a book, chapter or verse range that can never match.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// Any other SQLite failure while running a query.
    #[error("interlinear query failed")]
    Query(#[from] rusqlite::Error),
}

impl Error {
    pub(crate) fn not_found(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::NotFound {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(column: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedRow {
            column,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_selector(msg: impl Into<String>) -> Self {
        Error::InvalidSelector(msg.into())
    }

    /// Fold a `rusqlite` column-read failure into the right variant. Type and
    /// range conversion problems point at bad data, so they become
    /// `MalformedRow`; anything else is a query failure.
    pub(crate) fn from_column(column: &'static str, err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnType(_, _, ty) => {
                Error::malformed(column, format!("unexpected SQLite type {ty}"))
            }
            rusqlite::Error::IntegralValueOutOfRange(_, value) => {
                Error::malformed(column, format!("value {value} is out of range"))
            }
            rusqlite::Error::FromSqlConversionFailure(_, _, source) => {
                Error::malformed(column, source.to_string())
            }
            other => Error::Query(other),
        }
    }
}
