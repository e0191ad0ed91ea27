//! Offline dictionary backed by a word list

use super::{DictionaryError, DictionaryValidator};
use crate::core::Word;
use crate::wordlists::ALLOWED;
use async_trait::async_trait;
use rustc_hash::FxHashSet;

/// Accepts exactly the words in its list. Never fails.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Dictionary over the embedded allowed-guess list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(ALLOWED)
    }

    /// Dictionary over arbitrary strings; entries that are not valid words are skipped
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self {
            words: words
                .iter()
                .filter_map(|&w| Word::new(w).ok())
                .map(|w| w.text().to_string())
                .collect(),
        }
    }

    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl DictionaryValidator for WordListDictionary {
    async fn lookup(&self, word: &Word) -> Result<bool, DictionaryError> {
        Ok(self.contains(word))
    }
}
