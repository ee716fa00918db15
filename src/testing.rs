//! Test utilities for database setup.
//!
//! Reuses the authoritative schema initialization so tests never carry
//! their own copy of the table definitions.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::db::{self, DbPool, SqliteStore};

/// Test environment with a migrated quiz.db in a temporary directory.
///
/// The directory and database are removed when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Connection pool for quiz.db with full schema
    pub pool: DbPool,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let pool = db::init_db(&temp.path().join("quiz.db"))?;

        Ok(Self { temp, pool })
    }

    /// Store sharing this environment's connection
    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }

    /// Store on a fresh connection to the same file, as after a restart
    pub fn reopen_store(&self) -> rusqlite::Result<SqliteStore> {
        Ok(SqliteStore::new(db::init_db(&self.db_path())?))
    }

    pub fn db_path(&self) -> PathBuf {
        self.temp.path().join("quiz.db")
    }
}
