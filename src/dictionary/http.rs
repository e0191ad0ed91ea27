//! Online dictionary backed by a JSON HTTP API
//!
//! `GET {base_url}/{word}` is expected to answer with a JSON array of entry
//! objects for known words. A 404, or any other JSON that arrives intact (a
//! lone object, an empty array), means the word is unknown. Every other
//! non-2xx status means the service could not answer: 5xx, 429, and 403 or
//! other refusals that say nothing about the word itself.

use super::{DictionaryError, DictionaryValidator};
use crate::core::Word;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Free English dictionary API
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Remote dictionary lookup over HTTP
pub struct HttpDictionary {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpDictionary {
    /// Create a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DictionaryError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DictionaryError::Unavailable(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn entry_url(&self, word: &Word) -> String {
        format!("{}/{}", self.base_url, word.text().to_lowercase())
    }
}

/// A response body names a real word only if it is an array holding at
/// least one object
#[must_use]
pub fn is_dictionary_entry(body: &Value) -> bool {
    body.as_array()
        .is_some_and(|items| items.iter().any(Value::is_object))
}

#[async_trait]
impl DictionaryValidator for HttpDictionary {
    async fn lookup(&self, word: &Word) -> Result<bool, DictionaryError> {
        let url = self.entry_url(word);
        tracing::debug!(%url, "querying dictionary");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| DictionaryError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(word = %word, "dictionary has no entry");
            return Ok(false);
        }
        if !status.is_success() {
            return Err(DictionaryError::Unavailable(format!("HTTP {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DictionaryError::MalformedResponse(e.to_string()))?;

        Ok(is_dictionary_entry(&body))
    }
}
