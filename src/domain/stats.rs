use serde::{Deserialize, Serialize};

/// Attempted/correct counters for one quiz direction.
///
/// Persisted as `{"attempted":N,"correct":M}`. `correct <= attempted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizStats {
  pub attempted: u64,
  pub correct: u64,
}

impl QuizStats {
  pub fn new(attempted: u64, correct: u64) -> Self {
    Self {
      attempted,
      correct: correct.min(attempted),
    }
  }

  /// Count one answered question. Counters stop at `u64::MAX`.
  pub fn record(&mut self, is_correct: bool) {
    self.attempted = self.attempted.saturating_add(1);
    if is_correct {
      self.correct = self.correct.saturating_add(1).min(self.attempted);
    }
  }

  /// Fraction answered correctly, 0.0 when nothing was attempted
  pub fn accuracy(&self) -> f64 {
    if self.attempted > 0 {
      self.correct as f64 / self.attempted as f64
    } else {
      0.0
    }
  }

  pub fn percentage(&self) -> u64 {
    if self.attempted > 0 {
      (u128::from(self.correct) * 100 / u128::from(self.attempted)) as u64
    } else {
      0
    }
  }
}
