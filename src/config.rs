//! Where to find the interlinear database.

use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Error, Result};

/// Environment variable that overrides the default database location.
pub const DATABASE_ENV_VAR: &str = "BEREAN_INTERLINEAR_DB";
/// Folder name used beneath the user's data directory.
const DATA_DIR_NAME: &str = "berean-interlinear";
/// SQLite file name stored inside the data directory.
const DB_FILE_NAME: &str = "bsb-interlinear.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
}

impl Config {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Resolve the database path from `BEREAN_INTERLINEAR_DB`, falling back to
    /// `<data dir>/berean-interlinear/bsb-interlinear.db`. An empty variable
    /// counts as unset.
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var(DATABASE_ENV_VAR).ok())
    }

    fn resolve(env_value: Option<String>) -> Result<Self> {
        match env_value.filter(|value| !value.is_empty()) {
            Some(path) => Ok(Self::new(path)),
            None => default_db_path().map(Self::new),
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

/// Resolve the default database path inside the user's data directory.
fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| {
        Error::not_found(DB_FILE_NAME, "could not locate the user data directory")
    })?;
    Ok(base_dirs.data_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
