use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

/// Tables the accessor reads from. Both must exist for the file to count as an
/// interlinear database.
const REQUIRED_TABLES: [&str; 2] = ["interlinear", "strongs"];

/// Open the database read-only and check that it carries the expected tables.
/// The file is never created or migrated: a missing file, or one that is not
/// an interlinear database, is reported as `NotFound`.
pub fn open_read_only(path: &Path) -> Result<Connection> {
    if !path.is_file() {
        return Err(Error::not_found(path, "file does not exist"));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| Error::not_found(path, err.to_string()))?;

    verify_schema(&conn).map_err(|err| match err {
        Error::Query(source) => Error::not_found(path, source.to_string()),
        other => other,
    })?;

    tracing::debug!(path = %path.display(), "opened interlinear database");
    Ok(conn)
}

/// Confirm every required table is present. Called on connections handed in
/// by the caller as well as the ones opened here.
pub fn verify_schema(conn: &Connection) -> Result<()> {
    let mut stmt =
        conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")?;

    for table in REQUIRED_TABLES {
        let count: i64 = stmt.query_row([table], |row| row.get(0))?;
        if count == 0 {
            let path = conn
                .path()
                .filter(|path| !path.is_empty())
                .unwrap_or(":memory:");
            return Err(Error::not_found(path, format!("missing `{table}` table")));
        }
    }

    tracing::debug!("interlinear schema verified");
    Ok(())
}
