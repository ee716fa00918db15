use crate::domain::QuizQuestion;
use crate::error::{QuizError, Result};

/// Whether the option at `index` is the correct one. Pure read.
pub fn evaluate(question: &QuizQuestion, index: usize) -> Result<bool> {
  question
    .option(index)
    .map(|option| option.is_correct)
    .ok_or(QuizError::IndexOutOfRange {
      index,
      len: question.options.len(),
    })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{QuizDirection, QuizOption};

  fn option(text: &str, is_correct: bool) -> QuizOption {
    QuizOption {
      text: text.to_string(),
      term: text.to_string(),
      reading: text.to_string(),
      meaning: String::new(),
      is_correct,
    }
  }

  fn question() -> QuizQuestion {
    QuizQuestion {
      direction: QuizDirection::JapaneseToChinese,
      prompt: "本 (ほん)".to_string(),
      prompt_meaning: "book".to_string(),
      correct_answer: "书".to_string(),
      correct_answer_meaning: "book".to_string(),
      options: vec![
        option("水", false),
        option("书", true),
        option("家", false),
        option("朋友", false),
      ],
    }
  }

  #[test]
  fn test_evaluate_correct_and_wrong() {
    let q = question();
    assert!(evaluate(&q, 1).unwrap());
    assert!(!evaluate(&q, 0).unwrap());
    assert!(!evaluate(&q, 3).unwrap());
  }

  #[test]
  fn test_evaluate_out_of_range() {
    let q = question();
    assert!(matches!(
      evaluate(&q, 5),
      Err(QuizError::IndexOutOfRange { index: 5, len: 4 })
    ));
    assert!(evaluate(&q, 4).is_err());
  }
}
