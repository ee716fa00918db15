//! Project path functions - single source of truth for all file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! This allows keeping separate stats databases side by side:
//! ```bash
//! DATA_DIR=data/practice cargo run
//! ```

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// SQLite database holding quiz stats
pub fn stats_db_path() -> String {
    format!("{}/quiz.db", data_dir())
}

/// Default location of the generated word list
pub fn words_json_path() -> String {
    format!("{}/words.json", data_dir())
}

/// Default location of the delimited word source
pub fn words_csv_path() -> String {
    format!("{}/words.csv", data_dir())
}
