use serde::{Deserialize, Serialize};

use super::word::QuizDirection;

/// One selectable answer in a multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
  /// Term with its pronunciation aid, as shown to the learner
  pub text: String,
  pub term: String,
  pub reading: String,
  pub meaning: String,
  pub is_correct: bool,
}

/// A generated question. Created fresh for every request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
  pub direction: QuizDirection,
  pub prompt: String,
  pub prompt_meaning: String,
  pub correct_answer: String,
  pub correct_answer_meaning: String,
  pub options: Vec<QuizOption>,
}

impl QuizQuestion {
  /// Position of the correct option in display order
  pub fn correct_index(&self) -> Option<usize> {
    self.options.iter().position(|o| o.is_correct)
  }

  pub fn option(&self, index: usize) -> Option<&QuizOption> {
    self.options.get(index)
  }
}
