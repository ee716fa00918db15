//! Per-direction quiz statistics

use crate::config;
use crate::domain::{QuizDirection, QuizStats};

use super::{KeyValueStore, LogOnError, StoreError};

/// Storage key for a direction's stats, e.g. `quiz-stats-cn-jp`
pub fn stats_key(direction: QuizDirection) -> String {
    format!("{}{}", config::STATS_KEY_PREFIX, direction.as_str())
}

/// Reads and updates stats in an injected key-value store.
///
/// Holds no counters itself. Without a store every operation is a silent
/// no-op and reads return zero; store failures are logged and swallowed.
pub struct StatsTracker {
    store: Option<Box<dyn KeyValueStore>>,
}

impl StatsTracker {
    pub fn new(store: Option<Box<dyn KeyValueStore>>) -> Self {
        Self { store }
    }

    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self::new(Some(Box::new(store)))
    }

    /// Tracker for contexts without persistence
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Persisted stats, or zero if none exist or the store is unavailable
    pub fn read(&self, direction: QuizDirection) -> QuizStats {
        let Some(store) = &self.store else {
            return QuizStats::default();
        };
        load(store.as_ref(), direction).log_warn_default("Failed to read quiz stats")
    }

    /// Count one answer: attempted += 1, correct += 1 if it was right
    pub fn record(&self, direction: QuizDirection, was_correct: bool) {
        let Some(store) = &self.store else {
            tracing::debug!("No stats store, not recording {} answer", direction);
            return;
        };

        // Skip the write when the read failed, so existing stats are not clobbered
        let Some(mut stats) = load(store.as_ref(), direction).log_warn("Failed to read quiz stats")
        else {
            return;
        };
        stats.record(was_correct);

        let Some(json) = serde_json::to_string(&stats).log_warn("Failed to serialize quiz stats")
        else {
            return;
        };
        if store
            .set(&stats_key(direction), &json)
            .log_warn("Failed to save quiz stats")
            .is_some()
        {
            tracing::debug!(
                "Stats {}: {}/{} correct",
                direction,
                stats.correct,
                stats.attempted
            );
        }
    }

    /// Delete the persisted record for a direction
    pub fn reset(&self, direction: QuizDirection) {
        let Some(store) = &self.store else {
            return;
        };
        if store
            .remove(&stats_key(direction))
            .log_warn("Failed to reset quiz stats")
            .is_some()
        {
            tracing::info!("Reset stats for {}", direction);
        }
    }

    pub fn reset_all(&self) {
        for direction in QuizDirection::ALL {
            self.reset(direction);
        }
    }
}

/// Read one record. A corrupt value is treated as absent.
fn load(store: &dyn KeyValueStore, direction: QuizDirection) -> Result<QuizStats, StoreError> {
    let key = stats_key(direction);
    let Some(raw) = store.get(&key)? else {
        return Ok(QuizStats::default());
    };

    match serde_json::from_str::<QuizStats>(&raw) {
        // Clamp so correct <= attempted holds even for hand-edited values
        Ok(stats) => Ok(QuizStats::new(stats.attempted, stats.correct)),
        Err(e) => {
            tracing::warn!("Ignoring corrupt stats under {}: {}", key, e);
            Ok(QuizStats::default())
        }
    }
}
