//! One game of Wordle, from first letter to win, loss or restart
//!
//! Submitting a guess is split in two so the dictionary lookup can run
//! elsewhere: [`GameSession::begin_submit`] freezes the buffer and hands out
//! a [`PendingGuess`] ticket, and [`GameSession::resolve_submit`] applies the
//! lookup's [`Verdict`]. Only one ticket can be outstanding at a time, and a
//! ticket issued before a restart is discarded when it comes back.

use super::GameConfig;
use crate::core::{Feedback, KnownLetters, WORD_LENGTH, Word};
use crate::dictionary::{DictionaryValidator, LookupFailurePolicy, Verdict, verdict_for};

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Transient row feedback for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSignal {
    /// Current row is not a real word
    Rejected,
    /// Current row could not be checked against the dictionary
    Unverified,
    /// Row at this index was just submitted and should be revealed
    Revealed(usize),
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Ticket for a submission awaiting its dictionary lookup
#[derive(Debug, PartialEq, Eq)]
pub struct PendingGuess {
    generation: u64,
    word: Word,
}

impl PendingGuess {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit: buffer incomplete, game over, or a lookup already pending
    Ignored,
    /// The ticket belongs to a game that has since been restarted
    Stale,
    /// Not a real word; buffer kept for editing
    Rejected,
    /// Dictionary unreachable and the policy is to refuse; buffer kept
    Unverified,
    /// Guess recorded
    Accepted { feedback: Feedback, phase: Phase },
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub buffer: &'a str,
    pub attempt: usize,
    pub max_guesses: usize,
    pub history: &'a [GuessRecord],
    pub known: &'a KnownLetters,
    pub phase: Phase,
    pub row_signal: Option<RowSignal>,
    pub submitting: bool,
    /// Revealed only once the game is over
    pub target: Option<&'a Word>,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    config: GameConfig,
    buffer: String,
    attempt: usize,
    history: Vec<GuessRecord>,
    known: KnownLetters,
    phase: Phase,
    row_signal: Option<RowSignal>,
    generation: u64,
    submitting: bool,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Word, config: GameConfig) -> Self {
        Self {
            target,
            config,
            buffer: String::with_capacity(WORD_LENGTH),
            attempt: 1,
            history: Vec::with_capacity(config.max_guesses),
            known: KnownLetters::new(),
            phase: Phase::Active,
            row_signal: None,
            generation: 0,
            submitting: false,
        }
    }

    /// Append a letter to the guess being typed
    ///
    /// Ignored unless the game is active, no lookup is pending, the buffer
    /// has room, and `letter` is an ASCII letter. Returns `true` if appended.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if !self.accepts_edits() || self.buffer.len() >= WORD_LENGTH {
            return false;
        }
        if !letter.is_ascii_alphabetic() {
            return false;
        }

        self.buffer.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter
    ///
    /// Ignored on an empty buffer, after the game ends, and while a lookup
    /// is pending. Returns `true` if a letter was removed.
    pub fn remove_letter(&mut self) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Start submitting the buffer
    ///
    /// Returns `None` (and changes nothing) if the game is over, a lookup is
    /// already pending, or the buffer is not full.
    pub fn begin_submit(&mut self) -> Option<PendingGuess> {
        if self.phase != Phase::Active || self.submitting || self.buffer.len() < WORD_LENGTH {
            return None;
        }

        let word = Word::new(self.buffer.as_str()).ok()?;
        self.row_signal = None;
        self.submitting = true;

        tracing::debug!(guess = %word, attempt = self.attempt, "submitting guess");
        Some(PendingGuess {
            generation: self.generation,
            word,
        })
    }

    /// Apply the dictionary verdict for a ticket from [`Self::begin_submit`]
    pub fn resolve_submit(&mut self, pending: PendingGuess, verdict: Verdict) -> SubmitOutcome {
        if pending.generation != self.generation {
            tracing::debug!(
                guess = %pending.word,
                ticket = pending.generation,
                current = self.generation,
                "discarding lookup from previous game"
            );
            return SubmitOutcome::Stale;
        }
        self.submitting = false;

        match (verdict, self.config.on_lookup_failure) {
            (Verdict::Rejected, _) => {
                tracing::info!(guess = %pending.word, "guess is not a word");
                self.row_signal = Some(RowSignal::Rejected);
                SubmitOutcome::Rejected
            }
            (Verdict::Unavailable, LookupFailurePolicy::Reject) => {
                self.row_signal = Some(RowSignal::Unverified);
                SubmitOutcome::Unverified
            }
            (Verdict::Unavailable, LookupFailurePolicy::Accept) => {
                tracing::info!(guess = %pending.word, "accepting unverified guess");
                self.commit(pending.word)
            }
            (Verdict::Accepted, _) => self.commit(pending.word),
        }
    }

    /// Submit the buffer, looking it up in `validator`
    pub async fn submit_guess(&mut self, validator: &dyn DictionaryValidator) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };
        let verdict = verdict_for(validator, pending.word()).await;
        self.resolve_submit(pending, verdict)
    }

    /// Start over against the same target
    pub fn restart(&mut self) {
        let target = self.target.clone();
        self.restart_with(target);
    }

    /// Start over against a new target
    pub fn restart_with(&mut self, target: Word) {
        self.target = target;
        self.buffer.clear();
        self.attempt = 1;
        self.history.clear();
        self.known.clear();
        self.phase = Phase::Active;
        self.row_signal = None;
        self.submitting = false;
        self.generation = self.generation.wrapping_add(1);
        tracing::info!(generation = self.generation, "game restarted");
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            buffer: &self.buffer,
            attempt: self.attempt,
            max_guesses: self.config.max_guesses,
            history: &self.history,
            known: &self.known,
            phase: self.phase,
            row_signal: self.row_signal,
            submitting: self.submitting,
            target: self.phase.is_over().then_some(&self.target),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn known_letters(&self) -> &KnownLetters {
        &self.known
    }

    #[must_use]
    pub const fn row_signal(&self) -> Option<RowSignal> {
        self.row_signal
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    fn accepts_edits(&self) -> bool {
        self.phase == Phase::Active && !self.submitting
    }

    fn commit(&mut self, guess: Word) -> SubmitOutcome {
        let feedback = Feedback::classify(&guess, &self.target, self.config.rule);
        self.known.record_guess(&guess, &self.target);

        let row = self.history.len();
        let solved = guess == self.target;
        self.history.push(GuessRecord {
            word: guess,
            feedback,
        });
        self.attempt += 1;
        self.buffer.clear();
        self.row_signal = Some(RowSignal::Revealed(row));

        // Win takes priority over running out of guesses
        if solved {
            self.phase = Phase::Won;
        } else if self.history.len() >= self.config.max_guesses {
            self.phase = Phase::Lost;
        }

        tracing::info!(
            feedback = %feedback,
            attempt = self.attempt - 1,
            phase = ?self.phase,
            "guess recorded"
        );
        SubmitOutcome::Accepted {
            feedback,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassificationRule;
    use crate::core::LetterState::{Close, Correct, Wrong};
    use crate::dictionary::{DictionaryError, WordListDictionary};
    use async_trait::async_trait;

    struct OfflineDictionary;

    #[async_trait]
    impl DictionaryValidator for OfflineDictionary {
        async fn lookup(&self, _word: &Word) -> Result<bool, DictionaryError> {
            Err(DictionaryError::Unavailable("no network".into()))
        }
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn session(target: &str) -> GameSession {
        GameSession::new(word(target), GameConfig::default())
    }

    fn dictionary() -> WordListDictionary {
        WordListDictionary::embedded()
    }

    fn type_word(session: &mut GameSession, text: &str) {
        for c in text.chars() {
            session.add_letter(c);
        }
    }

    async fn guess(session: &mut GameSession, text: &str) -> SubmitOutcome {
        type_word(session, text);
        session.submit_guess(&dictionary()).await
    }

    fn assert_history_matches_attempt(session: &GameSession) {
        assert_eq!(session.history().len(), session.attempt() - 1);
    }

    #[test]
    fn new_session_is_empty_and_active() {
        let s = session("crane");
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.attempt(), 1);
        assert!(s.buffer().is_empty());
        assert!(s.history().is_empty());
        assert!(s.known_letters().is_empty());
        assert_eq!(s.row_signal(), None);
    }

    #[test]
    fn add_letter_uppercases_and_caps_length() {
        let mut s = session("crane");
        type_word(&mut s, "trai");
        assert_eq!(s.buffer(), "TRAI");

        assert!(s.add_letter('n'));
        assert!(!s.add_letter('s'));
        assert_eq!(s.buffer(), "TRAIN");
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let mut s = session("crane");
        assert!(!s.add_letter('1'));
        assert!(!s.add_letter(' '));
        assert!(!s.add_letter('é'));
        assert!(s.buffer().is_empty());
    }

    #[test]
    fn remove_letter_on_empty_buffer_is_noop() {
        let mut s = session("crane");
        assert!(!s.remove_letter());
        assert!(s.buffer().is_empty());

        type_word(&mut s, "ab");
        assert!(s.remove_letter());
        assert_eq!(s.buffer(), "A");
    }

    #[tokio::test]
    async fn incomplete_guess_is_ignored() {
        let mut s = session("crane");
        assert_eq!(guess(&mut s, "cran").await, SubmitOutcome::Ignored);
        assert_eq!(s.buffer(), "CRAN");
        assert_eq!(s.attempt(), 1);
        assert!(!s.is_submitting());
    }

    #[tokio::test]
    async fn valid_guess_is_recorded() {
        let mut s = session("crane");
        let outcome = guess(&mut s, "train").await;

        let SubmitOutcome::Accepted { feedback, phase } = outcome else {
            panic!("expected accepted guess, got {outcome:?}");
        };
        assert_eq!(feedback.states(), &[Wrong, Correct, Correct, Wrong, Close]);
        assert_eq!(phase, Phase::Active);

        assert_eq!(s.attempt(), 2);
        assert!(s.buffer().is_empty());
        assert_eq!(s.history()[0].word, word("train"));
        assert_eq!(s.row_signal(), Some(RowSignal::Revealed(0)));

        let known = s.known_letters();
        assert_eq!(known.get(b'T'), Wrong);
        assert_eq!(known.get(b'R'), Correct);
        assert_eq!(known.get(b'A'), Correct);
        assert_eq!(known.get(b'I'), Wrong);
        assert_eq!(known.get(b'N'), Close);
        assert_history_matches_attempt(&s);
    }

    #[tokio::test]
    async fn unknown_word_shakes_row_and_keeps_buffer() {
        let mut s = session("crane");
        assert_eq!(guess(&mut s, "xqzvw").await, SubmitOutcome::Rejected);

        assert_eq!(s.row_signal(), Some(RowSignal::Rejected));
        assert_eq!(s.buffer(), "XQZVW");
        assert_eq!(s.attempt(), 1);
        assert!(s.history().is_empty());

        // Player can keep editing the same row
        assert!(s.remove_letter());
        assert!(s.add_letter('x'));
        assert_eq!(s.buffer(), "XQZVX");
    }

    #[tokio::test]
    async fn next_submit_clears_shake() {
        let mut s = session("crane");
        guess(&mut s, "xqzvw").await;
        for _ in 0..WORD_LENGTH {
            s.remove_letter();
        }
        guess(&mut s, "train").await;
        assert_eq!(s.row_signal(), Some(RowSignal::Revealed(0)));
    }

    #[tokio::test]
    async fn exact_guess_wins_on_any_attempt() {
        for misses in 0..GameConfig::default().max_guesses {
            let mut s = session("crane");
            for _ in 0..misses {
                guess(&mut s, "train").await;
            }
            let outcome = guess(&mut s, "CrAnE").await;
            assert_eq!(
                outcome,
                SubmitOutcome::Accepted {
                    feedback: Feedback::SOLVED,
                    phase: Phase::Won
                }
            );
            assert_eq!(s.phase(), Phase::Won);
            assert_history_matches_attempt(&s);
        }
    }

    #[tokio::test]
    async fn last_wrong_guess_loses() {
        let mut s = session("crane");
        for _ in 0..5 {
            guess(&mut s, "train").await;
            assert_eq!(s.phase(), Phase::Active);
        }
        assert_eq!(s.attempt(), 6);

        guess(&mut s, "slate").await;
        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(s.attempt(), 7);
        assert_eq!(s.history().len(), 6);
        assert_eq!(s.snapshot().target, Some(&word("crane")));
    }

    #[tokio::test]
    async fn correct_final_guess_wins_not_loses() {
        let mut s = session("crane");
        for _ in 0..5 {
            guess(&mut s, "train").await;
        }
        guess(&mut s, "crane").await;
        assert_eq!(s.phase(), Phase::Won);
    }

    #[tokio::test]
    async fn terminal_phase_ignores_input() {
        let mut s = session("crane");
        guess(&mut s, "crane").await;
        assert_eq!(s.phase(), Phase::Won);

        assert!(!s.add_letter('a'));
        assert!(!s.remove_letter());
        assert_eq!(s.begin_submit(), None);
        assert_eq!(s.submit_guess(&dictionary()).await, SubmitOutcome::Ignored);
        assert_eq!(s.attempt(), 2);
    }

    #[tokio::test]
    async fn restart_resets_everything() {
        let mut s = session("crane");
        guess(&mut s, "train").await;
        type_word(&mut s, "sla");
        let generation = s.generation();

        s.restart();

        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.attempt(), 1);
        assert!(s.buffer().is_empty());
        assert!(s.history().is_empty());
        assert!(s.known_letters().is_empty());
        assert_eq!(s.row_signal(), None);
        assert_ne!(s.generation(), generation);

        // Same target survives a plain restart
        assert!(matches!(
            guess(&mut s, "crane").await,
            SubmitOutcome::Accepted {
                phase: Phase::Won,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn restart_with_new_target() {
        let mut s = session("crane");
        guess(&mut s, "crane").await;
        s.restart_with(word("train"));

        assert_eq!(s.phase(), Phase::Active);
        guess(&mut s, "crane").await;
        assert_eq!(s.phase(), Phase::Active);
        guess(&mut s, "train").await;
        assert_eq!(s.phase(), Phase::Won);
    }

    #[test]
    fn second_submit_is_refused_while_pending() {
        let mut s = session("crane");
        type_word(&mut s, "train");

        let pending = s.begin_submit().unwrap();
        assert!(s.is_submitting());
        assert_eq!(s.begin_submit(), None);

        // Buffer is frozen while the lookup runs
        assert!(!s.remove_letter());
        assert!(!s.add_letter('x'));

        s.resolve_submit(pending, Verdict::Accepted);
        assert_eq!(s.attempt(), 2);
        assert!(!s.is_submitting());
    }

    #[test]
    fn stale_result_after_restart_is_discarded() {
        let mut s = session("crane");
        type_word(&mut s, "train");
        let pending = s.begin_submit().unwrap();

        s.restart();
        type_word(&mut s, "sla");

        assert_eq!(
            s.resolve_submit(pending, Verdict::Accepted),
            SubmitOutcome::Stale
        );
        assert_eq!(s.attempt(), 1);
        assert!(s.history().is_empty());
        assert_eq!(s.buffer(), "SLA");
        assert!(s.known_letters().is_empty());
    }

    #[tokio::test]
    async fn unavailable_dictionary_rejects_by_default() {
        let mut s = session("crane");
        type_word(&mut s, "train");

        assert_eq!(
            s.submit_guess(&OfflineDictionary).await,
            SubmitOutcome::Unverified
        );
        assert_eq!(s.row_signal(), Some(RowSignal::Unverified));
        assert_eq!(s.buffer(), "TRAIN");
        assert_eq!(s.attempt(), 1);
        assert!(!s.is_submitting());
    }

    #[tokio::test]
    async fn unavailable_dictionary_can_accept_optimistically() {
        let config = GameConfig::new().with_lookup_failure_policy(LookupFailurePolicy::Accept);
        let mut s = GameSession::new(word("crane"), config);
        type_word(&mut s, "train");

        assert!(matches!(
            s.submit_guess(&OfflineDictionary).await,
            SubmitOutcome::Accepted {
                phase: Phase::Active,
                ..
            }
        ));
        assert_eq!(s.attempt(), 2);
    }

    #[tokio::test]
    async fn classification_rule_comes_from_config() {
        let config = GameConfig::new().with_rule(ClassificationRule::LetterCount);
        let mut s = GameSession::new(word("chaos"), config);
        let outcome = guess(&mut s, "sassy").await;

        let SubmitOutcome::Accepted { feedback, .. } = outcome else {
            panic!("expected accepted guess, got {outcome:?}");
        };
        assert_eq!(feedback.count(Close), 2);
    }

    #[tokio::test]
    async fn positional_rule_marks_every_misplaced_duplicate() {
        let mut s = session("chaos");
        let outcome = guess(&mut s, "sassy").await;

        let SubmitOutcome::Accepted { feedback, .. } = outcome else {
            panic!("expected accepted guess, got {outcome:?}");
        };
        assert_eq!(feedback.states(), &[Close, Close, Close, Close, Wrong]);
    }

    #[tokio::test]
    async fn custom_budget_controls_loss() {
        let mut s = GameSession::new(word("crane"), GameConfig::new().with_max_guesses(2));
        guess(&mut s, "train").await;
        assert_eq!(s.phase(), Phase::Active);
        guess(&mut s, "train").await;
        assert_eq!(s.phase(), Phase::Lost);
    }

    #[test]
    fn snapshot_hides_target_until_game_over() {
        let mut s = session("crane");
        type_word(&mut s, "tra");
        let snap = s.snapshot();
        assert_eq!(snap.buffer, "TRA");
        assert_eq!(snap.attempt, 1);
        assert_eq!(snap.max_guesses, 6);
        assert_eq!(snap.phase, Phase::Active);
        assert!(snap.target.is_none());
        assert!(!snap.submitting);
    }
}
