//! Quiz session: the word list, the current question and the answer flags.
//!
//! State only changes through the methods below:
//!
//! ```text
//! Empty --load_words--> Ready --next_question--> Active --select_answer--> Answered
//!                                                  ^                          |
//!                                                  +------next_question-------+
//! ```

use crate::config::OPTION_COUNT;
use crate::content::{WordSource, WordStore};
use crate::db::StatsTracker;
use crate::domain::{QuizDirection, QuizQuestion, QuizStats, WordEntry};
use crate::error::{QuizError, Result};

use super::{evaluate, generate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  /// No words loaded
  Empty,
  /// Words loaded, no question yet
  Ready,
  /// Question shown, awaiting an answer
  Active,
  /// Answer given, result visible
  Answered,
}

pub struct QuizSession {
  source: Box<dyn WordSource>,
  words: WordStore,
  stats: StatsTracker,
  current: Option<QuizQuestion>,
  show_result: bool,
  last_answer_correct: bool,
}

impl QuizSession {
  /// Create an empty session. Words are loaded on `load_words` or on the
  /// first `next_question`.
  pub fn new(source: Box<dyn WordSource>, stats: StatsTracker) -> Self {
    Self {
      source,
      words: WordStore::new(),
      stats,
      current: None,
      show_result: false,
      last_answer_correct: false,
    }
  }

  /// Create a session over an in-memory list, already loaded
  pub fn with_words(words: Vec<WordEntry>, stats: StatsTracker) -> Self {
    let mut session = Self::new(Box::new(words.clone()), stats);
    session.words = WordStore::from_words(words);
    session
  }

  pub fn state(&self) -> SessionState {
    if self.words.is_empty() {
      return SessionState::Empty;
    }
    match (&self.current, self.show_result) {
      (None, _) => SessionState::Ready,
      (Some(_), false) => SessionState::Active,
      (Some(_), true) => SessionState::Answered,
    }
  }

  /// (Re)load the word list. Any current question is discarded.
  pub fn load_words(&mut self) -> Result<usize> {
    self.current = None;
    self.show_result = false;
    self.last_answer_correct = false;
    Ok(self.words.load(self.source.as_ref())?)
  }

  /// Replace the current question with a fresh one.
  ///
  /// An empty session loads its words first and then serves the request.
  pub fn next_question(&mut self, direction: QuizDirection) -> Result<&QuizQuestion> {
    if self.words.is_empty() {
      tracing::debug!("No words loaded yet, loading before generating");
      self.load_words()?;
      if self.words.is_empty() {
        return Err(QuizError::InsufficientData {
          needed: OPTION_COUNT,
          found: 0,
        });
      }
    }

    let question = generate(direction, self.words.words())?;
    self.show_result = false;
    Ok(&*self.current.insert(question))
  }

  /// Answer the current question.
  ///
  /// Returns `Ok(None)` without touching anything when no question is
  /// awaiting an answer. An invalid index is rejected and changes nothing.
  pub fn select_answer(&mut self, index: usize, direction: QuizDirection) -> Result<Option<bool>> {
    if self.state() != SessionState::Active {
      tracing::debug!("Ignoring answer {} in state {:?}", index, self.state());
      return Ok(None);
    }
    let Some(question) = &self.current else {
      return Ok(None);
    };

    let correct = evaluate(question, index)?;
    if question.direction != direction {
      tracing::warn!(
        "Answer recorded for {} but question was generated for {}",
        direction,
        question.direction
      );
    }

    self.stats.record(direction, correct);
    self.last_answer_correct = correct;
    self.show_result = true;
    Ok(Some(correct))
  }

  pub fn get_stats(&self, direction: QuizDirection) -> QuizStats {
    self.stats.read(direction)
  }

  pub fn reset_stats(&self, direction: QuizDirection) {
    self.stats.reset(direction);
  }

  /// Reset the stats of every direction
  pub fn reset_all_stats(&self) {
    self.stats.reset_all();
  }

  pub fn current_question(&self) -> Option<&QuizQuestion> {
    self.current.as_ref()
  }

  pub fn show_result(&self) -> bool {
    self.show_result
  }

  pub fn last_answer_correct(&self) -> bool {
    self.last_answer_correct
  }

  pub fn words(&self) -> &[WordEntry] {
    self.words.words()
  }

  pub fn word_count(&self) -> usize {
    self.words.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::JsonFile;
  use crate::db::MemoryStore;
  use std::path::PathBuf;

  const CN_JP: QuizDirection = QuizDirection::ChineseToJapanese;
  const JP_CN: QuizDirection = QuizDirection::JapaneseToChinese;

  fn sample_words() -> Vec<WordEntry> {
    vec![
      WordEntry::new("水", "みず", "liquid", "水", "shuǐ", "liquid"),
      WordEntry::new("本", "ほん", "book", "书", "shū", "book"),
      WordEntry::new("家", "いえ", "house", "家", "jiā", "house"),
      WordEntry::new("友達", "ともだち", "friend", "朋友", "péngyǒu", "friend"),
    ]
  }

  fn session() -> QuizSession {
    QuizSession::new(
      Box::new(sample_words()),
      StatsTracker::with_store(MemoryStore::new()),
    )
  }

  fn correct_and_wrong_index(session: &QuizSession) -> (usize, usize) {
    let question = session.current_question().unwrap();
    let correct = question.correct_index().unwrap();
    (correct, (correct + 1) % question.options.len())
  }

  #[test]
  fn test_new_session_is_empty() {
    let session = session();
    assert_eq!(session.state(), SessionState::Empty);
    assert_eq!(session.word_count(), 0);
    assert!(session.current_question().is_none());
    assert!(!session.show_result());
  }

  #[test]
  fn test_load_words_makes_ready() {
    let mut session = session();
    assert_eq!(session.load_words().unwrap(), 4);
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.words().len(), 4);
  }

  #[test]
  fn test_next_question_loads_when_empty() {
    let mut session = session();
    session.next_question(CN_JP).unwrap();
    assert_eq!(session.word_count(), 4);
    assert_eq!(session.state(), SessionState::Active);
  }

  #[test]
  fn test_full_cycle() {
    let mut session = session();
    session.next_question(CN_JP).unwrap();
    let (correct, _) = correct_and_wrong_index(&session);

    assert_eq!(session.select_answer(correct, CN_JP).unwrap(), Some(true));
    assert_eq!(session.state(), SessionState::Answered);
    assert!(session.show_result());
    assert!(session.last_answer_correct());

    session.next_question(CN_JP).unwrap();
    assert_eq!(session.state(), SessionState::Active);
    assert!(!session.show_result());
  }

  #[test]
  fn test_stats_follow_answers() {
    let mut session = session();

    session.next_question(CN_JP).unwrap();
    let (correct, _) = correct_and_wrong_index(&session);
    session.select_answer(correct, CN_JP).unwrap();

    session.next_question(CN_JP).unwrap();
    let (_, wrong) = correct_and_wrong_index(&session);
    assert_eq!(session.select_answer(wrong, CN_JP).unwrap(), Some(false));
    assert!(!session.last_answer_correct());

    assert_eq!(session.get_stats(CN_JP), QuizStats { attempted: 2, correct: 1 });
    assert_eq!(session.get_stats(JP_CN), QuizStats::default());
  }

  #[test]
  fn test_select_answer_without_question_is_noop() {
    let mut session = session();
    session.load_words().unwrap();

    assert_eq!(session.select_answer(0, CN_JP).unwrap(), None);
    assert_eq!(session.get_stats(CN_JP), QuizStats::default());
    assert!(!session.show_result());
    assert_eq!(session.state(), SessionState::Ready);
  }

  #[test]
  fn test_select_answer_when_empty_is_noop() {
    let mut session = session();
    assert_eq!(session.select_answer(2, JP_CN).unwrap(), None);
    assert_eq!(session.state(), SessionState::Empty);
  }

  #[test]
  fn test_second_answer_is_ignored() {
    let mut session = session();
    session.next_question(JP_CN).unwrap();
    let (correct, wrong) = correct_and_wrong_index(&session);

    session.select_answer(correct, JP_CN).unwrap();
    assert_eq!(session.select_answer(wrong, JP_CN).unwrap(), None);
    assert!(session.last_answer_correct());
    assert_eq!(session.get_stats(JP_CN), QuizStats { attempted: 1, correct: 1 });
  }

  #[test]
  fn test_select_answer_out_of_range() {
    let mut session = session();
    session.next_question(CN_JP).unwrap();

    let result = session.select_answer(5, CN_JP);
    assert!(matches!(
      result,
      Err(QuizError::IndexOutOfRange { index: 5, len: 4 })
    ));
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.get_stats(CN_JP), QuizStats::default());
  }

  #[test]
  fn test_reset_stats() {
    let mut session = session();
    session.next_question(CN_JP).unwrap();
    session.select_answer(0, CN_JP).unwrap();

    session.reset_stats(CN_JP);
    assert_eq!(session.get_stats(CN_JP), QuizStats::default());
    session.reset_stats(CN_JP);
    assert_eq!(session.get_stats(CN_JP), QuizStats::default());
  }

  #[test]
  fn test_reset_all_stats() {
    let mut session = session();
    for direction in QuizDirection::ALL {
      session.next_question(direction).unwrap();
      session.select_answer(0, direction).unwrap();
      assert_eq!(session.get_stats(direction).attempted, 1);
    }

    session.reset_all_stats();
    for direction in QuizDirection::ALL {
      assert_eq!(session.get_stats(direction), QuizStats::default());
    }
  }

  #[test]
  fn test_stats_without_store() {
    let mut session = QuizSession::with_words(sample_words(), StatsTracker::unavailable());
    session.next_question(JP_CN).unwrap();
    assert!(session.select_answer(0, JP_CN).unwrap().is_some());
    assert_eq!(session.get_stats(JP_CN), QuizStats::default());
  }

  #[test]
  fn test_load_failure_is_reported() {
    let mut session = QuizSession::new(
      Box::new(JsonFile(PathBuf::from("/nonexistent/words.json"))),
      StatsTracker::unavailable(),
    );

    assert!(matches!(session.next_question(CN_JP), Err(QuizError::DataLoad(_))));
    assert_eq!(session.state(), SessionState::Empty);
  }

  #[test]
  fn test_empty_source_fails_instead_of_looping() {
    let mut session = QuizSession::new(Box::new(Vec::<WordEntry>::new()), StatsTracker::unavailable());
    assert!(matches!(
      session.next_question(CN_JP),
      Err(QuizError::InsufficientData { found: 0, .. })
    ));
  }

  #[test]
  fn test_too_few_words_is_reported() {
    let mut words = sample_words();
    words.pop();
    let mut session = QuizSession::with_words(words, StatsTracker::unavailable());

    assert!(matches!(
      session.next_question(JP_CN),
      Err(QuizError::InsufficientData { .. })
    ));
    assert_eq!(session.state(), SessionState::Ready);
  }

  #[test]
  fn test_reload_discards_question() {
    let mut session = session();
    session.next_question(CN_JP).unwrap();
    session.load_words().unwrap();
    assert!(session.current_question().is_none());
    assert_eq!(session.state(), SessionState::Ready);
  }
}
