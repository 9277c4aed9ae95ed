use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::morphology::{AnalysisResult, FeatureMap, PartOfSpeech};

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "la", ...)
    fn language_code(&self) -> &str;

    /// Normalize a single word for matching
    fn normalize(&self, text: &str) -> String;

    /// Break text into tokens, dropping words that normalize to nothing
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Analyze the whole input as one token
    fn analyze(&self, text: &str) -> Result<AnalysisResult, EngineError>;

    /// Analyze every whitespace-delimited token, in input order
    fn analyze_many(&self, text: &str) -> Result<Vec<AnalysisResult>, EngineError>;
}

/// Optional trait for languages with conjugation/declension
pub trait StemStripper: Send + Sync {
    /// Split an inflected word into every plausible stem + ending pair
    fn strip(&self, word: &str) -> Vec<StemCandidate>;
}

/// Optional trait for word frequency data
pub trait FrequencyProvider: Send + Sync {
    /// Get frequency rank (lower = more common), None if not in list
    fn frequency(&self, lemma: &str) -> Option<u32>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Word as typed, surrounding punctuation removed
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

impl Token {
    pub fn new(surface: impl Into<String>, normalized: impl Into<String>, position: usize) -> Self {
        Self {
            surface: surface.into(),
            normalized: normalized.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemCandidate {
    pub stem: String,
    pub ending: String,
    pub paradigm: String,
    pub part_of_speech: PartOfSpeech,
    pub features: FeatureMap,
}
