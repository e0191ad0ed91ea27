//! Game configuration

use crate::core::ClassificationRule;
use crate::dictionary::LookupFailurePolicy;

/// Default guess budget
pub const MAX_GUESSES: usize = 6;

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub rule: ClassificationRule,
    pub on_lookup_failure: LookupFailurePolicy,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            rule: ClassificationRule::Positional,
            on_lookup_failure: LookupFailurePolicy::Reject,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        // A zero budget would make every game lost before it starts
        self.max_guesses = if max_guesses == 0 { 1 } else { max_guesses };
        self
    }

    #[must_use]
    pub const fn with_rule(mut self, rule: ClassificationRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub const fn with_lookup_failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.on_lookup_failure = policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
