//! Multiple-choice question generation.
//!
//! One entry is drawn as the answer; three distractors are drawn from the
//! entries whose answer term differs from it. Both the distractor pool and
//! the final option order use a uniform shuffle.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

use crate::config::{DISTRACTOR_COUNT, OPTION_COUNT};
use crate::domain::{format_with_reading, QuizDirection, QuizOption, QuizQuestion, WordEntry};
use crate::error::{QuizError, Result};

/// Generate a question using the thread-local RNG
pub fn generate(direction: QuizDirection, words: &[WordEntry]) -> Result<QuizQuestion> {
  generate_with_rng(direction, words, &mut rand::rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
  direction: QuizDirection,
  words: &[WordEntry],
  rng: &mut R,
) -> Result<QuizQuestion> {
  let correct = words.choose(rng).ok_or(QuizError::InsufficientData {
    needed: OPTION_COUNT,
    found: 0,
  })?;

  let mut distractors = distractor_pool(direction, words, correct);
  if distractors.len() < DISTRACTOR_COUNT {
    tracing::warn!(
      "Only {} distractors for {} question on '{}'",
      distractors.len(),
      direction,
      direction.answer_key(correct)
    );
    return Err(QuizError::InsufficientData {
      needed: DISTRACTOR_COUNT,
      found: distractors.len(),
    });
  }

  // Shuffle and take 3
  distractors.shuffle(rng);
  distractors.truncate(DISTRACTOR_COUNT);

  let mut options = Vec::with_capacity(OPTION_COUNT);
  options.push(build_option(direction, correct, true));
  options.extend(distractors.into_iter().map(|w| build_option(direction, w, false)));
  options.shuffle(rng);

  let (prompt, prompt_meaning) = direction.prompt_of(correct);
  let (term, reading, meaning) = direction.answer_of(correct);

  let question = QuizQuestion {
    direction,
    prompt,
    prompt_meaning,
    correct_answer: format_with_reading(term, reading),
    correct_answer_meaning: meaning.to_string(),
    options,
  };
  tracing::debug!(
    "Generated {} question '{}' (answer at {:?})",
    direction,
    question.prompt,
    question.correct_index()
  );

  Ok(question)
}

/// Entries usable as wrong answers: answer term differs from the correct
/// entry's, one entry per distinct term.
fn distractor_pool<'a>(
  direction: QuizDirection,
  words: &'a [WordEntry],
  correct: &WordEntry,
) -> Vec<&'a WordEntry> {
  let mut seen: HashSet<&str> = HashSet::new();
  seen.insert(direction.answer_key(correct));

  words
    .iter()
    .filter(|&w| seen.insert(direction.answer_key(w)))
    .collect()
}

fn build_option(direction: QuizDirection, word: &WordEntry, is_correct: bool) -> QuizOption {
  let (term, reading, meaning) = direction.answer_of(word);
  QuizOption {
    text: format_with_reading(term, reading),
    term: term.to_string(),
    reading: reading.to_string(),
    meaning: meaning.to_string(),
    is_correct,
  }
}
