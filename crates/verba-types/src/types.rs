use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Orchestrator output for one translate call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub primary_translation: String,
    pub alternatives: Vec<String>,
    /// Input exactly as received
    pub source_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub original: String,
    pub translation: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn now(original: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translation: translation.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    pub definition: String,
}

impl VocabularyEntry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }

    /// Vocabulary is deduplicated on the word, ignoring case
    pub fn same_word(&self, other: &VocabularyEntry) -> bool {
        self.word.to_lowercase() == other.word.to_lowercase()
    }
}

/// Result of adding a word to the vocabulary list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyOutcome {
    pub inserted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl VocabularyOutcome {
    pub fn inserted() -> Self {
        Self {
            inserted: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            inserted: false,
            reason: Some(reason.into()),
        }
    }
}
