use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dictionary::DefinitionEntry;
use crate::language::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adjective,
    Pronoun,
    Adverb,
    Preposition,
    Conjunction,
    Other,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Preposition => "Preposition",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Other => "Other",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical feature names.
///
/// Variant order is the canonical rendering order, so iterating a
/// `BTreeMap<Feature, _>` already yields features in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Tense,
    Mood,
    Voice,
    Person,
    Number,
    Case,
    Gender,
    Degree,
}

impl Feature {
    pub const CANONICAL_ORDER: [Feature; 8] = [
        Feature::Tense,
        Feature::Mood,
        Feature::Voice,
        Feature::Person,
        Feature::Number,
        Feature::Case,
        Feature::Gender,
        Feature::Degree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Tense => "tense",
            Feature::Mood => "mood",
            Feature::Voice => "voice",
            Feature::Person => "person",
            Feature::Number => "number",
            Feature::Case => "case",
            Feature::Gender => "gender",
            Feature::Degree => "degree",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type FeatureMap = BTreeMap<Feature, String>;

/// One candidate grammatical analysis of a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphParse {
    /// Normalized surface form the parse was produced for
    pub surface: String,
    /// Dictionary headword, never empty
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub features: FeatureMap,
    /// Lower is more likely. 0 is an exact form-table hit.
    pub rank: u32,
}

impl MorphParse {
    pub fn new(surface: impl Into<String>, lemma: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        let lemma = lemma.into();
        debug_assert!(!lemma.is_empty(), "parse lemma must not be empty");

        Self {
            surface: surface.into(),
            lemma,
            part_of_speech,
            features: FeatureMap::new(),
            rank: 0,
        }
    }

    pub fn with_feature(mut self, feature: Feature, value: impl Into<String>) -> Self {
        self.features.insert(feature, value.into());
        self
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }

    pub fn feature(&self, feature: Feature) -> Option<&str> {
        self.features.get(&feature).map(String::as_str)
    }
}

/// Engine output for a single token or phrase.
///
/// Built once per request and handed to the caller; nothing mutates it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub token: Token,
    pub parses: Vec<MorphParse>,
    pub definitions: Vec<DefinitionEntry>,
    /// Looked up successfully, nothing matched
    pub not_found: bool,
}

impl AnalysisResult {
    pub fn new(token: Token, parses: Vec<MorphParse>, definitions: Vec<DefinitionEntry>) -> Self {
        if parses.is_empty() {
            return Self::not_found(token);
        }

        Self {
            token,
            parses,
            definitions,
            not_found: false,
        }
    }

    pub fn not_found(token: Token) -> Self {
        Self {
            token,
            parses: Vec::new(),
            definitions: Vec::new(),
            not_found: true,
        }
    }

    pub fn lemmas(&self) -> Vec<&str> {
        let mut lemmas: Vec<&str> = Vec::new();
        for parse in &self.parses {
            if !lemmas.contains(&parse.lemma.as_str()) {
                lemmas.push(&parse.lemma);
            }
        }
        lemmas
    }
}
