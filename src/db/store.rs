//! Key-value persistence behind the stats tracker.

use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use super::{try_lock, DbPool};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store unavailable")]
    Unavailable,
}

/// Synchronous string-keyed, string-valued store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Store backed by the `kv_store` table
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = try_lock(&self.pool)?;
        Ok(get_value(&conn, key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = try_lock(&self.pool)?;
        Ok(set_value(&conn, key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let conn = try_lock(&self.pool)?;
        Ok(delete_value(&conn, key)?)
    }
}

pub fn get_value(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

pub fn set_value(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete_value(conn: &Connection, key: &str) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
    Ok(())
}

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Unavailable)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Unavailable)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Unavailable)?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;

    #[test]
    fn test_sqlite_store_set_get_remove() {
        let env = TestEnv::new().unwrap();
        let store = env.store();

        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_sqlite_store_remove_missing_is_ok() {
        let env = TestEnv::new().unwrap();
        assert!(env.store().remove("missing").is_ok());
    }

    #[test]
    fn test_sqlite_store_survives_reopen() {
        let env = TestEnv::new().unwrap();
        env.store().set("quiz-stats-cn-jp", "{}").unwrap();

        let reopened = env.reopen_store().unwrap();
        assert_eq!(
            reopened.get("quiz-stats-cn-jp").unwrap(),
            Some("{}".to_string())
        );
    }

    #[test]
    fn test_memory_store_clones_share_values() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap(), Some("v".to_string()));

        handle.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
