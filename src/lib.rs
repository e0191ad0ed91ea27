//! Wordle Game
//!
//! A terminal Wordle: guess evaluation, keyboard hints and the game state
//! machine, with dictionary-backed guess validation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::Word;
//! use wordle_game::dictionary::WordListDictionary;
//! use wordle_game::game::{GameConfig, GameSession, Phase};
//!
//! # async fn play() {
//! let mut session = GameSession::new(Word::new("crane").unwrap(), GameConfig::default());
//! let dictionary = WordListDictionary::embedded();
//!
//! for letter in "crane".chars() {
//!     session.add_letter(letter);
//! }
//! session.submit_guess(&dictionary).await;
//! assert_eq!(session.phase(), Phase::Won);
//! # }
//! ```

// Core domain types
pub mod core;

// Dictionary validation
pub mod dictionary;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
