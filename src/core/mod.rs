//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the known-letter memory behind keyboard
//! hints. Everything here is pure and synchronous.

mod feedback;
mod known_letters;
mod word;

pub use feedback::{ClassificationRule, Feedback, LetterState};
pub use known_letters::KnownLetters;
pub use word::{WORD_LENGTH, Word, WordError};
