use std::collections::HashMap;

use serde::Deserialize;
use verba_core::dictionary::{DefinitionEntry, Lexicon, LexiconMetadata, LoadError, StemMatch};
use verba_core::morphology::{Feature, FeatureMap, MorphParse, PartOfSpeech};
use verba_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::paradigm::find_paradigm;

/// One lexicon entry: a lemma with its senses and listed forms
#[derive(Debug, Clone)]
pub struct LatinLexeme {
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub stem: Option<String>,
    pub paradigm: Option<String>,
    pub gender: Option<String>,
    pub senses: Vec<Sense>,
    pub forms: Vec<Form>,
}

#[derive(Debug, Clone)]
pub struct Sense {
    pub short: String,
    pub long: Option<String>,
}

/// A listed inflected form, already normalized
#[derive(Debug, Clone)]
pub struct Form {
    pub form: String,
    pub features: FeatureMap,
}

impl LatinLexeme {
    fn key(&self) -> (&str, PartOfSpeech) {
        (&self.lemma, self.part_of_speech)
    }

    /// Features of a parse of this lexeme, with the noun's gender filled in
    fn parse_features(&self, features: &FeatureMap) -> FeatureMap {
        let mut features = features.clone();
        if self.part_of_speech == PartOfSpeech::Noun {
            if let Some(gender) = &self.gender {
                features
                    .entry(Feature::Gender)
                    .or_insert_with(|| gender.clone());
            }
        }
        features
    }
}

// JSON structures of the lexicon data file
#[derive(Debug, Deserialize)]
struct LexiconJson {
    entries: Vec<LexemeJson>,
}

#[derive(Debug, Deserialize)]
struct LexemeJson {
    lemma: String,
    pos: PartOfSpeech,
    #[serde(default)]
    stem: Option<String>,
    #[serde(default)]
    paradigm: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    senses: Vec<SenseJson>,
    #[serde(default)]
    forms: Vec<FormJson>,
}

#[derive(Debug, Deserialize)]
struct SenseJson {
    short: String,
    #[serde(default)]
    long: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FormJson {
    form: String,
    #[serde(default)]
    features: FeatureMap,
}

/// Latin lexicon with form, stem and lemma indices
pub struct LatinLexicon {
    entries: Vec<LatinLexeme>,
    // normalized form -> (entry, form) positions, in stored order
    form_index: HashMap<String, Vec<(usize, usize)>>,
    stem_index: HashMap<(String, String), Vec<usize>>,
    lemma_index: HashMap<String, Vec<usize>>,
}

impl LatinLexicon {
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Load a lexicon from its JSON representation
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: LexiconJson = serde_json::from_str(json_str)?;
        let preprocessor = DefaultPreprocessor;

        let mut entries = Vec::with_capacity(data.entries.len());
        for json_entry in data.entries {
            let lemma = json_entry.lemma.trim().to_string();
            if lemma.is_empty() {
                return Err(LoadError::InvalidFormat("entry with empty lemma".to_string()));
            }

            let (stem, paradigm) = match (json_entry.stem, json_entry.paradigm) {
                (Some(stem), Some(paradigm)) => {
                    let Some(found) = find_paradigm(&paradigm) else {
                        return Err(LoadError::InvalidFormat(format!(
                            "{lemma}: unknown paradigm '{paradigm}'"
                        )));
                    };
                    if found.part_of_speech != json_entry.pos {
                        return Err(LoadError::InvalidFormat(format!(
                            "{lemma}: paradigm '{paradigm}' does not inflect a {}",
                            json_entry.pos
                        )));
                    }
                    (Some(preprocessor.normalize_word(&stem)), Some(paradigm))
                }
                (None, None) => (None, None),
                _ => {
                    return Err(LoadError::InvalidFormat(format!(
                        "{lemma}: stem and paradigm must be given together"
                    )));
                }
            };

            let mut forms = Vec::with_capacity(json_entry.forms.len());
            for form in json_entry.forms {
                let normalized = preprocessor.normalize_word(&form.form);
                if normalized.is_empty() {
                    return Err(LoadError::InvalidFormat(format!(
                        "{lemma}: form '{}' is empty after normalization",
                        form.form
                    )));
                }
                forms.push(Form {
                    form: normalized,
                    features: form.features,
                });
            }

            entries.push(LatinLexeme {
                lemma,
                part_of_speech: json_entry.pos,
                stem,
                paradigm,
                gender: json_entry.gender,
                senses: json_entry
                    .senses
                    .into_iter()
                    .map(|s| Sense {
                        short: s.short,
                        long: s.long,
                    })
                    .collect(),
                forms,
            });
        }

        Ok(Self::from_entries(entries))
    }

    fn from_entries(entries: Vec<LatinLexeme>) -> Self {
        let mut form_index: HashMap<String, Vec<(usize, usize)>> = HashMap::new();
        let mut stem_index: HashMap<(String, String), Vec<usize>> = HashMap::new();
        let mut lemma_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (entry_idx, entry) in entries.iter().enumerate() {
            for (form_idx, form) in entry.forms.iter().enumerate() {
                form_index
                    .entry(form.form.clone())
                    .or_default()
                    .push((entry_idx, form_idx));
            }
            if let (Some(stem), Some(paradigm)) = (&entry.stem, &entry.paradigm) {
                stem_index
                    .entry((stem.clone(), paradigm.clone()))
                    .or_default()
                    .push(entry_idx);
            }
            lemma_index
                .entry(entry.lemma.clone())
                .or_default()
                .push(entry_idx);
        }

        Self {
            entries,
            form_index,
            stem_index,
            lemma_index,
        }
    }

    /// Get the number of entries in the lexicon
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct surface forms in the form table
    pub fn form_count(&self) -> usize {
        self.form_index.len()
    }

    /// Merge another lexicon into this one.
    /// Entries of the other lexicon replace entries with the same lemma and part of speech.
    pub fn merge(self, other: LatinLexicon) -> Self {
        let mut entries = self.entries;

        for entry in other.entries {
            entries.retain(|e| e.key() != entry.key());
            entries.push(entry);
        }

        Self::from_entries(entries)
    }
}

impl Default for LatinLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for LatinLexicon {
    fn lookup_form(&self, form: &str) -> Vec<MorphParse> {
        let Some(positions) = self.form_index.get(form) else {
            return Vec::new();
        };

        positions
            .iter()
            .filter_map(|&(entry_idx, form_idx)| {
                let entry = self.entries.get(entry_idx)?;
                let listed = entry.forms.get(form_idx)?;
                let mut parse = MorphParse::new(form, entry.lemma.clone(), entry.part_of_speech);
                parse.features = entry.parse_features(&listed.features);
                Some(parse)
            })
            .collect()
    }

    fn lookup_stem(&self, stem: &str, paradigm: &str) -> Vec<StemMatch> {
        let key = (stem.to_string(), paradigm.to_string());
        let Some(indices) = self.stem_index.get(&key) else {
            return Vec::new();
        };

        indices
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
            .map(|entry| StemMatch {
                lemma: entry.lemma.clone(),
                part_of_speech: entry.part_of_speech,
                gender: entry.gender.clone(),
            })
            .collect()
    }

    fn definitions(&self, lemma: &str) -> Vec<DefinitionEntry> {
        let Some(indices) = self.lemma_index.get(lemma) else {
            return Vec::new();
        };

        indices
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
            .flat_map(|entry| entry.senses.iter())
            .enumerate()
            .map(|(rank, sense)| DefinitionEntry {
                lemma: lemma.to_string(),
                short_definition: sense.short.clone(),
                long_definition: sense.long.clone(),
                sense_rank: rank as u32,
            })
            .collect()
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: "Verba Latin lexicon".to_string(),
            version: "1.0".to_string(),
            language: "la".to_string(),
            entry_count: self.entries.len(),
            form_count: self.form_index.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "entries": [
            {
                "lemma": "regina", "pos": "noun", "stem": "regin",
                "paradigm": "first_declension", "gender": "feminine",
                "senses": [{ "short": "queen" }],
                "forms": [
                    { "form": "rēgīna", "features": { "case": "nominative", "number": "singular" } },
                    { "form": "rēgīnā", "features": { "case": "ablative", "number": "singular" } }
                ]
            },
            {
                "lemma": "cum", "pos": "preposition",
                "senses": [{ "short": "with" }],
                "forms": [{ "form": "cum" }]
            },
            {
                "lemma": "cum", "pos": "conjunction",
                "senses": [{ "short": "when, since", "long": "temporal or causal" }],
                "forms": [{ "form": "cum" }]
            }
        ]
    }"#;

    #[test]
    fn test_forms_are_normalized_and_ambiguous() {
        let lexicon = LatinLexicon::from_json(SAMPLE).unwrap();
        let parses = lexicon.lookup_form("regina");

        assert_eq!(parses.len(), 2);
        assert_eq!(parses[0].feature(Feature::Case), Some("nominative"));
        assert_eq!(parses[1].feature(Feature::Case), Some("ablative"));
        assert_eq!(parses[0].feature(Feature::Gender), Some("feminine"));
    }

    #[test]
    fn test_definitions_span_homographs_in_stored_order() {
        let lexicon = LatinLexicon::from_json(SAMPLE).unwrap();
        let defs = lexicon.definitions("cum");

        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].short_definition, "with");
        assert_eq!(defs[0].sense_rank, 0);
        assert_eq!(defs[1].long_definition.as_deref(), Some("temporal or causal"));
        assert_eq!(defs[1].sense_rank, 1);
    }

    #[test]
    fn test_stem_index() {
        let lexicon = LatinLexicon::from_json(SAMPLE).unwrap();
        let matches = lexicon.lookup_stem("regin", "first_declension");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].gender.as_deref(), Some("feminine"));
        assert!(lexicon.lookup_stem("regin", "third_declension").is_empty());
    }

    #[test]
    fn test_rejects_unknown_paradigm() {
        let json = r#"{ "entries": [
            { "lemma": "x", "pos": "noun", "stem": "x", "paradigm": "sixth_declension", "senses": [] }
        ] }"#;
        assert!(matches!(
            LatinLexicon::from_json(json),
            Err(LoadError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty_lemma() {
        let json = r#"{ "entries": [ { "lemma": "  ", "pos": "adverb", "senses": [] } ] }"#;
        assert!(LatinLexicon::from_json(json).is_err());
    }

    #[test]
    fn test_merge_replaces_same_lemma_and_pos() {
        let base = LatinLexicon::from_json(SAMPLE).unwrap();
        let patch = LatinLexicon::from_json(
            r#"{ "entries": [ { "lemma": "regina", "pos": "noun", "senses": [{ "short": "queen, princess" }],
                 "forms": [{ "form": "regina" }] } ] }"#,
        )
        .unwrap();

        let merged = base.merge(patch);
        assert_eq!(merged.entry_count(), 3);
        assert_eq!(merged.definitions("regina")[0].short_definition, "queen, princess");
        assert_eq!(merged.lookup_form("regina").len(), 1);
        assert!(merged.lookup_stem("regin", "first_declension").is_empty());
    }
}
