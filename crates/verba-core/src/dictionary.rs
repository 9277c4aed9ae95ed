use serde::{Deserialize, Serialize};

use crate::morphology::{MorphParse, PartOfSpeech};

/// Lemma-keyed lexicon with an inflected-form table
pub trait Lexicon: Send + Sync {
    /// Exact match of a normalized surface form against the form table
    fn lookup_form(&self, form: &str) -> Vec<MorphParse>;

    /// Lexemes declared with this stem under this paradigm
    fn lookup_stem(&self, stem: &str, paradigm: &str) -> Vec<StemMatch>;

    /// All senses recorded for a lemma, ordered by sense rank
    fn definitions(&self, lemma: &str) -> Vec<DefinitionEntry>;

    /// Get lexicon metadata
    fn metadata(&self) -> LexiconMetadata;
}

/// One dictionary sense of a lemma
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionEntry {
    pub lemma: String,
    pub short_definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_definition: Option<String>,
    /// 0 is the primary sense
    pub sense_rank: u32,
}

/// A lexeme reached through its stem rather than a listed form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemMatch {
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    /// Inherent gender of nouns
    pub gender: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LexiconMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
    pub form_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
