pub mod schema;
pub mod stats;
pub mod store;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use schema::run_migrations;
pub use stats::{stats_key, StatsTracker};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};

pub type DbPool = Arc<Mutex<Connection>>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

/// Try to acquire the database lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, StoreError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    tracing::error!("Database mutex poisoned - a thread panicked while holding the lock");
    StoreError::Unavailable
  })
}

pub fn init_db(path: &Path) -> Result<DbPool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).ok();
  }

  let conn = Connection::open(path)?;
  run_migrations(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}

/// Open the stats database, or `None` when it cannot be opened.
///
/// Stats are optional, so a broken database only costs persistence.
pub fn open_store(path: &Path) -> Option<Box<dyn KeyValueStore>> {
  match init_db(path) {
    Ok(pool) => {
      tracing::info!("Stats database: {}", path.display());
      Some(Box::new(SqliteStore::new(pool)))
    }
    Err(e) => {
      tracing::warn!("Stats disabled, could not open {}: {}", path.display(), e);
      None
    }
  }
}
