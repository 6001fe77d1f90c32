//! Result type definitions and the saved-word list

use crate::store::{keys, KvStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fallback definition when the model omits one
pub const FALLBACK_DEFINITION: &str = "No definition available";

/// A single candidate word returned by a search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    /// Identifier, fresh per search; cross-search identity is `word`
    pub id: String,
    /// The candidate word, canonical uppercase
    pub word: String,
    /// Dictionary-style definition
    pub definition: String,
    /// Usage example, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Relevance confidence in [0, 1]
    pub confidence: f64,
    /// Whether the user has saved this word
    pub is_saved: bool,
}

impl WordResult {
    /// Create a result with a freshly generated id.
    ///
    /// Ids only need to be unique within one result list; the index plus
    /// the current wall-clock millis matches the original id scheme.
    pub fn new(
        index: usize,
        word: impl Into<String>,
        definition: impl Into<String>,
        example: Option<String>,
        confidence: f64,
    ) -> Self {
        Self {
            id: generate_id(index),
            word: word.into().to_uppercase(),
            definition: definition.into(),
            example,
            confidence: confidence.clamp(0.0, 1.0),
            is_saved: false,
        }
    }
}

/// Generate a result id from its list position
pub fn generate_id(index: usize) -> String {
    format!("result-{}-{}", index, Utc::now().timestamp_millis())
}

/// The user's saved-word list, de-duplicated by word.
///
/// Mutated by the presentation layer only, never by the search pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedWords {
    words: Vec<WordResult>,
}

impl SavedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize from the stored JSON array, empty on absence or damage
    pub fn from_json(raw: Option<&str>) -> Self {
        let words = raw
            .and_then(|s| serde_json::from_str::<Vec<WordResult>>(s).ok())
            .unwrap_or_default();
        Self { words }
    }

    /// Serialize for key-value storage
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.words).unwrap_or_else(|_| "[]".to_string())
    }

    /// Load the saved list from the backing store
    pub fn load(store: &dyn KvStore) -> Self {
        Self::from_json(store.get(keys::SAVED_WORDS).as_deref())
    }

    /// Write the saved list back to the store
    pub fn persist(&self, store: &mut dyn KvStore) {
        store.set(keys::SAVED_WORDS, &self.to_json());
    }

    /// Whether a word is currently saved
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.word == word)
    }

    /// Toggle membership for a result; returns true when it is now saved
    pub fn toggle(&mut self, result: &WordResult) -> bool {
        if self.contains(&result.word) {
            self.words.retain(|w| w.word != result.word);
            false
        } else {
            let mut saved = result.clone();
            saved.is_saved = true;
            self.words.push(saved);
            true
        }
    }

    /// Stamp a fresh result list against the saved set
    pub fn mark(&self, results: &mut [WordResult]) {
        for result in results {
            result.is_saved = self.contains(&result.word);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordResult> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
