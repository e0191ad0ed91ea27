//! Best-known classification per letter, used to color the keyboard
//!
//! Entries are created on first sighting and only ever move up the order
//! `Wrong < Close < Correct`. The map is cleared when a game restarts.

use super::{LetterState, Word};
use rustc_hash::FxHashMap;

/// Letter → best classification observed so far in the current game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLetters {
    letters: FxHashMap<u8, LetterState>,
}

impl KnownLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best classification for `letter`, or `Inactive` if never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        self.letters
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Store `state` for `letter` if it is strictly more informative than
    /// what is already known
    ///
    /// Returns `true` if the map changed. `Inactive` is never stored.
    pub fn upgrade(&mut self, letter: u8, state: LetterState) -> bool {
        if state == LetterState::Inactive {
            return false;
        }

        let letter = letter.to_ascii_uppercase();
        let current = self.get(letter);
        if state <= current {
            return false;
        }

        self.letters.insert(letter, state);
        true
    }

    /// Fold one guess into the map
    ///
    /// - Letter absent from the target and not yet seen → `Wrong`.
    /// - Letter in its target position → `Correct` (new or upgraded from `Close`).
    /// - Letter elsewhere in the target and not yet seen → `Close`.
    ///
    /// Existing entries are never downgraded.
    pub fn record_guess(&mut self, guess: &Word, target: &Word) -> &mut Self {
        for (i, &letter) in guess.letters().iter().enumerate() {
            let state = if !target.has_letter(letter) {
                LetterState::Wrong
            } else if target.letter_at(i) == letter {
                LetterState::Correct
            } else {
                LetterState::Close
            };
            self.upgrade(letter, state);
        }
        self
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Known letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        let mut entries: Vec<(u8, LetterState)> =
            self.letters.iter().map(|(&l, &s)| (l, s)).collect();
        entries.sort_unstable_by_key(|&(l, _)| l);
        entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Close, Correct, Inactive, Wrong};
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn unseen_letters_are_inactive() {
        let known = KnownLetters::new();
        assert_eq!(known.get(b'Q'), Inactive);
        assert!(known.is_empty());
    }

    #[test]
    fn record_train_against_crane() {
        let mut known = KnownLetters::new();
        known.record_guess(&word("train"), &word("crane"));

        assert_eq!(known.get(b'T'), Wrong);
        assert_eq!(known.get(b'R'), Correct);
        assert_eq!(known.get(b'A'), Correct);
        assert_eq!(known.get(b'I'), Wrong);
        assert_eq!(known.get(b'N'), Close);
        assert_eq!(known.len(), 5);
    }

    #[test]
    fn close_upgrades_to_correct() {
        let target = word("crane");
        let mut known = KnownLetters::new();

        known.record_guess(&word("never"), &target);
        assert_eq!(known.get(b'N'), Close);

        known.record_guess(&word("blank"), &target);
        assert_eq!(known.get(b'N'), Correct);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let target = word("crane");
        let mut known = KnownLetters::new();

        known.record_guess(&word("crane"), &target);
        assert_eq!(known.get(b'C'), Correct);

        // C now in the wrong slot
        known.record_guess(&word("occur"), &target);
        assert_eq!(known.get(b'C'), Correct);
        assert_eq!(known.get(b'R'), Correct);
    }

    #[test]
    fn duplicate_letter_takes_best_position() {
        // Second E of GEESE sits at the target's E position
        let mut known = KnownLetters::new();
        known.record_guess(&word("geese"), &word("crane"));
        assert_eq!(known.get(b'E'), Correct);
        assert_eq!(known.get(b'G'), Wrong);
        assert_eq!(known.get(b'S'), Wrong);
    }

    #[test]
    fn upgrade_refuses_non_increasing_changes() {
        let mut known = KnownLetters::new();
        assert!(known.upgrade(b'a', Close));
        assert!(!known.upgrade(b'A', Wrong));
        assert!(!known.upgrade(b'A', Close));
        assert!(!known.upgrade(b'A', Inactive));
        assert!(known.upgrade(b'A', Correct));
        assert_eq!(known.get(b'a'), Correct);
    }

    #[test]
    fn upgrade_never_stores_inactive() {
        let mut known = KnownLetters::new();
        assert!(!known.upgrade(b'Z', Inactive));
        assert!(known.is_empty());
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut known = KnownLetters::new();
        known.record_guess(&word("train"), &word("crane"));
        let letters: Vec<u8> = known.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, b"AINRT".to_vec());
    }

    #[test]
    fn clear_empties_map() {
        let mut known = KnownLetters::new();
        known.record_guess(&word("train"), &word("crane"));
        known.clear();
        assert!(known.is_empty());
        assert_eq!(known.get(b'R'), Inactive);
    }
}
