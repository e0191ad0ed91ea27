//! Game state machine
//!
//! [`GameSession`] owns one game: the target, the guess being typed, the
//! submitted guesses and the keyboard hints. Front ends drive it with
//! letter/backspace/submit/restart and render from [`GameSnapshot`].

mod config;
mod session;

pub use config::{GameConfig, MAX_GUESSES};
pub use session::{
    GameSession, GameSnapshot, GuessRecord, PendingGuess, Phase, RowSignal, SubmitOutcome,
};
