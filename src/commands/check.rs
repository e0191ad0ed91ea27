//! Check command
//!
//! Classifies a single guess against a target without playing a game.

use crate::core::{ClassificationRule, Feedback, KnownLetters, Word};
use anyhow::{Context, Result};

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    pub known: KnownLetters,
}

/// Classify `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word.
pub fn check_guess(guess: &str, target: &str, rule: ClassificationRule) -> Result<CheckResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;

    let feedback = Feedback::classify(&guess, &target, rule);
    let mut known = KnownLetters::new();
    known.record_guess(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
        known,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Close, Correct, Wrong};

    #[test]
    fn check_train_against_crane() {
        let result = check_guess("train", "crane", ClassificationRule::Positional).unwrap();

        assert_eq!(
            result.feedback.states(),
            &[Wrong, Correct, Correct, Wrong, Close]
        );
        assert_eq!(result.known.get(b'N'), Close);
        assert_eq!(result.known.len(), 5);
    }

    #[test]
    fn check_respects_rule() {
        let positional = check_guess("sassy", "chaos", ClassificationRule::Positional).unwrap();
        let counted = check_guess("sassy", "chaos", ClassificationRule::LetterCount).unwrap();

        assert_eq!(positional.feedback.count(Close), 4);
        assert_eq!(counted.feedback.count(Close), 2);
    }

    #[test]
    fn check_rejects_bad_input() {
        let err = check_guess("trains", "crane", ClassificationRule::Positional)
            .err()
            .unwrap();
        assert!(err.to_string().contains("invalid guess"));

        let err = check_guess("train", "cr4ne", ClassificationRule::Positional)
            .err()
            .unwrap();
        assert!(err.to_string().contains("invalid target"));
    }
}
