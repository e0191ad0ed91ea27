//! Dictionary validation
//!
//! The game only needs one question answered about a full guess: is it a
//! real word? [`DictionaryValidator`] is that boundary. A lookup either
//! answers it (`Ok(true)` / `Ok(false)`) or fails to ([`DictionaryError`]),
//! and the two cases are kept apart so the session can treat an outage
//! differently from a rejected word.

mod http;
mod word_list;

pub use http::{DEFAULT_DICTIONARY_URL, HttpDictionary};
pub use word_list::WordListDictionary;

use crate::core::Word;
use async_trait::async_trait;
use thiserror::Error;

/// Lookup failures: the word could not be verified either way.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary unavailable: {0}")]
    Unavailable(String),

    #[error("malformed dictionary response: {0}")]
    MalformedResponse(String),
}

/// "Is this a real word" query used by the game session.
#[async_trait]
pub trait DictionaryValidator: Send + Sync {
    /// Look up a complete guess.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError`] when the dictionary cannot answer.
    async fn lookup(&self, word: &Word) -> Result<bool, DictionaryError>;
}

/// Outcome of a lookup as seen by the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
    Unavailable,
}

impl From<Result<bool, DictionaryError>> for Verdict {
    fn from(result: Result<bool, DictionaryError>) -> Self {
        match result {
            Ok(true) => Self::Accepted,
            Ok(false) => Self::Rejected,
            Err(err) => {
                tracing::warn!(error = %err, "dictionary lookup failed");
                Self::Unavailable
            }
        }
    }
}

/// What to do with a guess the dictionary could not verify
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LookupFailurePolicy {
    /// Keep the guess in the buffer and signal that it could not be checked
    #[default]
    Reject,
    /// Accept the guess as if the dictionary had confirmed it
    Accept,
}

/// Look up `word` and fold the result into a [`Verdict`]
pub async fn verdict_for(validator: &dyn DictionaryValidator, word: &Word) -> Verdict {
    tracing::debug!(word = %word, "looking up guess");
    let verdict = Verdict::from(validator.lookup(word).await);
    tracing::debug!(word = %word, ?verdict, "lookup finished");
    verdict
}
