pub mod question;
pub mod stats;
pub mod word;

pub use question::{QuizOption, QuizQuestion};
pub use stats::QuizStats;
pub use word::{format_with_reading, QuizDirection, WordEntry};
