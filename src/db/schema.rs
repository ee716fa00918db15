use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // String-keyed store for quiz stats; values are JSON documents
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS kv_store (
      key TEXT PRIMARY KEY,
      value TEXT NOT NULL
    );
    "#,
  )?;

  Ok(())
}
