//! Application configuration constants.
//!
//! Runtime settings are resolved with priority: config.toml > environment
//! (.env is loaded first) > defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::QuizDirection;
use crate::paths;

// ==================== Quiz Configuration ====================

/// Options shown per question
pub const OPTION_COUNT: usize = 4;

/// Number of distractor choices in multiple choice mode
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Stats are stored under `quiz-stats-<direction>`
pub const STATS_KEY_PREFIX: &str = "quiz-stats-";

/// Direction used when nothing is configured
pub const DEFAULT_DIRECTION: QuizDirection = QuizDirection::ChineseToJapanese;

// ==================== Runtime Configuration ====================

/// Name of the optional config file in the working directory
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data: Option<DataConfig>,
    quiz: Option<QuizSection>,
}

#[derive(Debug, Default, Deserialize)]
struct DataConfig {
    words: Option<String>,
    stats_db: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct QuizSection {
    direction: Option<String>,
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    /// Word list file; `None` uses the bundled list
    pub words_path: Option<PathBuf>,
    pub stats_db_path: PathBuf,
    pub direction: QuizDirection,
}

/// Load configuration from config.toml, the environment and defaults.
pub fn load_config() -> QuizConfig {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let file = read_config_file(Path::new(CONFIG_FILE));
    resolve(file, |key| std::env::var(key).ok())
}

fn read_config_file(path: &Path) -> Option<FileConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<FileConfig>(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            None
        }
    }
}

fn resolve(file: Option<FileConfig>, env: impl Fn(&str) -> Option<String>) -> QuizConfig {
    let file = file.unwrap_or_default();
    let data = file.data.unwrap_or_default();
    let quiz = file.quiz.unwrap_or_default();

    let words_path = if let Some(path) = data.words {
        tracing::info!("Using words from config.toml: {}", path);
        Some(PathBuf::from(path))
    } else if let Some(path) = env("WORDS_PATH") {
        tracing::info!("Using words from WORDS_PATH env: {}", path);
        Some(PathBuf::from(path))
    } else {
        tracing::info!("Using bundled word list");
        None
    };

    let stats_db_path = data
        .stats_db
        .or_else(|| env("STATS_DB_PATH"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(paths::stats_db_path()));

    let direction = quiz
        .direction
        .or_else(|| env("QUIZ_DIRECTION"))
        .and_then(|value| match value.parse::<QuizDirection>() {
            Ok(direction) => Some(direction),
            Err(e) => {
                tracing::warn!("{}, falling back to {}", e, DEFAULT_DIRECTION);
                None
            }
        })
        .unwrap_or(DEFAULT_DIRECTION);

    QuizConfig {
        words_path,
        stats_db_path,
        direction,
    }
}
