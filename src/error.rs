//! Errors surfaced to callers of the quiz API.
//!
//! Persistence failures never appear here: stats are best-effort and
//! `StatsTracker` swallows them after logging.

use thiserror::Error;

use crate::content::LoadError;

#[derive(Debug, Error)]
pub enum QuizError {
    /// Word source unavailable or malformed
    #[error("failed to load words: {0}")]
    DataLoad(#[from] LoadError),

    /// Not enough distinct answers to build a full question
    #[error("not enough words for a question: need {needed} distinct answers, found {found}")]
    InsufficientData { needed: usize, found: usize },

    /// Selected option does not exist
    #[error("option index {index} out of range (question has {len} options)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, QuizError>;
