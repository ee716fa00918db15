//! Question generation, answer evaluation and the session that ties them
//! to the word store and stats.

pub mod evaluator;
pub mod generator;
pub mod session;

pub use evaluator::evaluate;
pub use generator::{generate, generate_with_rng};
pub use session::{QuizSession, SessionState};
