use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jpzh_quiz::config;
use jpzh_quiz::content::{source_for_path, BundledWords, WordSource};
use jpzh_quiz::db::{self, StatsTracker};
use jpzh_quiz::domain::{QuizDirection, QuizQuestion};
use jpzh_quiz::quiz::{QuizSession, SessionState};
use jpzh_quiz::QuizError;

const HELP: &str = "\
Commands:
  1-4     answer the current question
  n       next question (Enter also works after answering)
  d       switch direction
  s       show stats
  r       reset stats for the current direction
  R       reset stats for both directions
  q       quit";

enum Flow {
  Continue,
  Quit,
}

fn main() {
  // Logs go to stderr so they don't interleave with the quiz on stdout
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jpzh_quiz=warn".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let config = config::load_config();

  let source: Box<dyn WordSource> = match &config.words_path {
    Some(path) => source_for_path(path),
    None => Box::new(BundledWords),
  };
  let stats = StatsTracker::new(db::open_store(&config.stats_db_path));
  let mut session = QuizSession::new(source, stats);
  let mut direction = config.direction;

  match session.load_words() {
    Ok(count) => println!("Loaded {} words.", count),
    Err(e) => {
      tracing::error!("{}", e);
      std::process::exit(1);
    }
  }

  println!("{}\n", HELP);
  if let Flow::Quit = ask(&mut session, direction) {
    std::process::exit(1);
  }
  prompt();

  let stdin = io::stdin();
  for line in stdin.lock().lines() {
    let line = match line {
      Ok(line) => line,
      Err(e) => {
        tracing::error!("Failed to read input: {}", e);
        break;
      }
    };

    if let Flow::Quit = handle_command(&mut session, &mut direction, line.trim()) {
      break;
    }
    prompt();
  }

  print_stats(&session);
}

fn handle_command(session: &mut QuizSession, direction: &mut QuizDirection, input: &str) -> Flow {
  match input {
    "q" | "quit" => return Flow::Quit,
    "n" => return ask(session, *direction),
    "" if session.state() == SessionState::Answered => return ask(session, *direction),
    "" => {}
    "d" => {
      *direction = direction.reversed();
      println!("Direction: {}", direction.label());
      return ask(session, *direction);
    }
    "s" => print_stats(session),
    "r" => {
      session.reset_stats(*direction);
      println!("Stats reset for {}.", direction.label());
    }
    "R" => {
      session.reset_all_stats();
      println!("Stats reset for both directions.");
    }
    "h" | "?" => println!("{}", HELP),
    other => match other.parse::<usize>() {
      Ok(choice) => answer(session, *direction, choice),
      Err(_) => println!("Unknown command '{}'. Type h for help.", other),
    },
  }
  Flow::Continue
}

/// Generate and show a new question. Generation errors end the program.
fn ask(session: &mut QuizSession, direction: QuizDirection) -> Flow {
  match session.next_question(direction) {
    Ok(question) => {
      print_question(question);
      Flow::Continue
    }
    Err(e) => {
      tracing::error!("Cannot generate a question: {}", e);
      Flow::Quit
    }
  }
}

fn answer(session: &mut QuizSession, direction: QuizDirection, choice: usize) {
  // Options are numbered from 1 on screen
  let index = choice.wrapping_sub(1);
  match session.select_answer(index, direction) {
    Ok(Some(_)) => {
      if let Some(question) = session.current_question() {
        print_result(question, session.last_answer_correct());
      }
    }
    Ok(None) => println!("No question is waiting for an answer. Press n for the next one."),
    Err(QuizError::IndexOutOfRange { len, .. }) => println!("Choose a number from 1 to {}.", len),
    Err(e) => tracing::error!("{}", e),
  }
}

fn print_question(question: &QuizQuestion) {
  println!();
  println!("{}", question.direction.label());
  println!("  {}", question.prompt);
  for (i, option) in question.options.iter().enumerate() {
    println!("  {}. {}", i + 1, option.text);
  }
}

fn print_result(question: &QuizQuestion, correct: bool) {
  if correct {
    println!("Correct!");
  } else {
    println!("Wrong. The answer is {}.", question.correct_answer);
  }
  println!(
    "  {} = {} ({} / {})",
    question.prompt, question.correct_answer, question.prompt_meaning, question.correct_answer_meaning
  );
  println!("Press Enter for the next question.");
}

fn print_stats(session: &QuizSession) {
  for direction in QuizDirection::ALL {
    let stats = session.get_stats(direction);
    println!(
      "{}: {}/{} correct ({}%)",
      direction.label(),
      stats.correct,
      stats.attempted,
      stats.percentage()
    );
  }
}

fn prompt() {
  print!("> ");
  let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
  use super::*;
  use jpzh_quiz::domain::WordEntry;

  fn session() -> QuizSession {
    let words = vec![
      WordEntry::new("水", "みず", "liquid", "水", "shuǐ", "liquid"),
      WordEntry::new("本", "ほん", "book", "书", "shū", "book"),
      WordEntry::new("家", "いえ", "house", "家", "jiā", "house"),
      WordEntry::new("友達", "ともだち", "friend", "朋友", "péngyǒu", "friend"),
    ];
    QuizSession::with_words(words, StatsTracker::unavailable())
  }

  #[test]
  fn test_empty_input_keeps_pending_question() {
    let mut session = session();
    let mut direction = QuizDirection::ChineseToJapanese;
    session.next_question(direction).unwrap();
    let before = session.current_question().cloned();

    assert!(matches!(handle_command(&mut session, &mut direction, ""), Flow::Continue));
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.current_question().cloned(), before);
  }

  #[test]
  fn test_empty_input_after_answer_asks_next() {
    let mut session = session();
    let mut direction = QuizDirection::JapaneseToChinese;
    session.next_question(direction).unwrap();
    session.select_answer(0, direction).unwrap();

    assert!(matches!(handle_command(&mut session, &mut direction, ""), Flow::Continue));
    assert_eq!(session.state(), SessionState::Active);
  }
}
