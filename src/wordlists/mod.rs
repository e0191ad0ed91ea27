//! Word lists for target selection and offline validation
//!
//! Provides embedded word lists compiled into the binary, plus helpers to
//! load custom lists and pick a target.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::dictionary::DictionaryValidator;
use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Pick a random target from `pool`
///
/// Returns `None` if the pool is empty.
pub fn pick_target<R: Rng + ?Sized>(pool: &[Word], rng: &mut R) -> Option<Word> {
    pool.choose(rng).cloned()
}

/// Supplies the target for each new game
///
/// A fixed target is returned every time; otherwise targets are drawn from
/// the pool with a seedable RNG.
pub struct TargetPicker {
    pool: Vec<Word>,
    fixed: Option<Word>,
    rng: StdRng,
}

impl TargetPicker {
    #[must_use]
    pub fn random(pool: Vec<Word>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        Self {
            pool,
            fixed: None,
            rng,
        }
    }

    #[must_use]
    pub fn fixed(target: Word) -> Self {
        Self {
            pool: Vec::new(),
            fixed: Some(target),
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Next target, or `None` if there is nothing to pick from
    pub fn next_target(&mut self) -> Option<Word> {
        if let Some(target) = &self.fixed {
            return Some(target.clone());
        }
        pick_target(&self.pool, &mut self.rng)
    }
}

/// Refuse a target the dictionary rejects, since guessing it could never win
///
/// # Errors
///
/// Returns an error if the dictionary says `target` is not a word. An
/// unreachable dictionary is only logged.
pub async fn ensure_guessable(target: &Word, validator: &dyn DictionaryValidator) -> Result<()> {
    match validator.lookup(target).await {
        Ok(true) => Ok(()),
        Ok(false) => bail!("target word '{target}' is not in the dictionary"),
        Err(e) => {
            tracing::warn!(word = %target, error = %e, "could not verify target word");
            Ok(())
        }
    }
}

/// Keep only the candidates the dictionary accepts
pub async fn guessable_targets(pool: Vec<Word>, validator: &dyn DictionaryValidator) -> Vec<Word> {
    let before = pool.len();
    let mut kept = Vec::with_capacity(before);
    for word in pool {
        if matches!(validator.lookup(&word).await, Ok(true)) {
            kept.push(word);
        }
    }
    if kept.len() < before {
        tracing::info!(
            dropped = before - kept.len(),
            "answers missing from dictionary"
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 478, "Expected 478 answer words");
        assert_eq!(ALLOWED_COUNT, 3231, "Expected 3231 allowed words");
    }

    #[test]
    fn pick_target_is_seed_stable() {
        let pool = loader::words_from_slice(ANSWERS);
        let a = pick_target(&pool, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = pick_target(&pool, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert!(pool.contains(&a));
    }

    #[test]
    fn fixed_picker_repeats_target() {
        let crane = Word::new("crane").unwrap();
        let mut picker = TargetPicker::fixed(crane.clone());
        assert_eq!(picker.next_target(), Some(crane.clone()));
        assert_eq!(picker.next_target(), Some(crane));
    }

    #[test]
    fn seeded_pickers_agree() {
        let pool = loader::words_from_slice(ANSWERS);
        let mut a = TargetPicker::random(pool.clone(), Some(42));
        let mut b = TargetPicker::random(pool, Some(42));
        for _ in 0..5 {
            assert_eq!(a.next_target(), b.next_target());
        }
    }

    #[test]
    fn empty_picker_yields_nothing() {
        assert!(TargetPicker::random(Vec::new(), Some(1)).next_target().is_none());
    }

    #[test]
    fn pick_target_empty_pool() {
        assert!(pick_target(&[], &mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn common_words_are_allowed() {
        let dictionary = WordListDictionary::embedded();
        for word in ["hello", "words", "pizza", "world", "house", "water"] {
            assert!(
                dictionary.contains(&Word::new(word).unwrap()),
                "'{word}' should be allowed"
            );
        }
    }

    #[tokio::test]
    async fn target_outside_dictionary_is_refused() {
        let dictionary = WordListDictionary::from_slice(&["crane", "slate"]);
        let crane = Word::new("crane").unwrap();
        let hello = Word::new("hello").unwrap();

        assert!(ensure_guessable(&crane, &dictionary).await.is_ok());
        let err = ensure_guessable(&hello, &dictionary).await.unwrap_err();
        assert!(err.to_string().contains("HELLO"));
    }

    #[tokio::test]
    async fn guessable_targets_drops_unknown_answers() {
        let dictionary = WordListDictionary::from_slice(&["crane", "slate"]);
        let pool = loader::words_from_slice(&["crane", "hello", "slate"]);

        let kept = guessable_targets(pool, &dictionary).await;
        assert_eq!(kept, loader::words_from_slice(&["crane", "slate"]));
    }

    #[tokio::test]
    async fn embedded_answers_are_all_guessable() {
        let pool = loader::words_from_slice(ANSWERS);
        let kept = guessable_targets(pool, &WordListDictionary::embedded()).await;
        assert_eq!(kept.len(), ANSWERS_COUNT);
    }
}
