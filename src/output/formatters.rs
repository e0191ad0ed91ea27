//! Formatting utilities for terminal output

use crate::core::{Feedback, KnownLetters, LetterState, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, shared by the line and TUI front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render one letter as a colored tile like " A "
#[must_use]
pub fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Close => text.black().on_yellow().bold(),
        LetterState::Wrong => text.white().on_bright_black(),
        LetterState::Inactive => text.normal(),
    }
}

/// Render a submitted guess as a row of colored tiles
#[must_use]
pub fn feedback_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.states())
        .map(|(letter, &state)| tile(letter, state).to_string())
        .collect()
}

/// Render the keyboard, one string per row, colored by known letters
#[must_use]
pub fn keyboard_rows(known: &KnownLetters) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|key| tile(key, known.get(key as u8)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Plain-text known letters, e.g. "A:G I:- N:Y"
#[must_use]
pub fn known_letters_summary(known: &KnownLetters) -> String {
    known
        .iter()
        .map(|(letter, state)| format!("{}:{}", letter as char, state.code()))
        .collect::<Vec<_>>()
        .join(" ")
}
