//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - `Correct` (right letter, right position)
//! - `Close` (letter in the target, wrong position)
//! - `Wrong` (letter not in the target)
//!
//! `Inactive` is only a rendering default for tiles and keys that carry no
//! information yet; classification never produces it.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single letter, ordered by how much it tells the player
///
/// `Inactive < Wrong < Close < Correct`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    #[default]
    Inactive,
    Wrong,
    Close,
    Correct,
}

impl LetterState {
    /// Single-character code used in plain output
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Close => 'Y',
            Self::Wrong => '-',
            Self::Inactive => ' ',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Close => '🟨',
            Self::Wrong | Self::Inactive => '⬜',
        }
    }
}

/// How duplicate letters in a guess are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ClassificationRule {
    /// Every misplaced letter present anywhere in the target is `Close`,
    /// regardless of how many times it occurs there
    #[default]
    Positional,
    /// Official Wordle scoring: `Close` marks are capped by the number of
    /// unmatched copies of the letter left in the target
    LetterCount,
}

/// Feedback for one full guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Classify `guess` against `target` with the positional rule
    ///
    /// For each index: same letter as the target → `Correct`; otherwise the
    /// letter appears anywhere in the target → `Close`; otherwise `Wrong`.
    /// Duplicate letters are not capped by their count in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState::*, Word};
    ///
    /// let guess = Word::new("train").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.states(), &[Wrong, Correct, Correct, Wrong, Close]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterState::Wrong; WORD_LENGTH];

        for (i, state) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                *state = LetterState::Correct;
            } else if target.has_letter(letter) {
                *state = LetterState::Close;
            }
        }

        Self(result)
    }

    /// Classify `guess` against `target` with exact duplicate-letter handling
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark misplaced letters while the pool still has copies
    #[must_use]
    pub fn calculate_counted(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterState::Wrong; WORD_LENGTH];
        let mut available = target.letter_counts();

        for (i, state) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                *state = LetterState::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, state) in result.iter_mut().enumerate() {
            if *state == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *state = LetterState::Close;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Classify with the given rule
    #[must_use]
    pub fn classify(guess: &Word, target: &Word, rule: ClassificationRule) -> Self {
        match rule {
            ClassificationRule::Positional => Self::calculate(guess, target),
            ClassificationRule::LetterCount => Self::calculate_counted(guess, target),
        }
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.code())?;
        }
        Ok(())
    }
}
