use std::path::Path;

use verba_core::dictionary::{DefinitionEntry, Lexicon};
use verba_core::error::EngineError;
use verba_core::language::{FrequencyProvider, LanguageProcessor, StemStripper, Token};
use verba_core::morphology::{AnalysisResult, Feature, MorphParse, PartOfSpeech};
use verba_core::preprocess::{self, DefaultPreprocessor, Preprocessor};

use crate::frequency::LatinFrequency;
use crate::lexicon::LatinLexicon;
use crate::loader::LexiconLoader;
use crate::paradigm::LatinStemStripper;

pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;

/// Rank given to parses found by stem stripping instead of the form table
pub const STEM_RANK: u32 = 1;

/// Latin language processor
pub struct LatinProcessor {
    lexicon: LatinLexicon,
    stripper: LatinStemStripper,
    frequency: LatinFrequency,
    preprocessor: DefaultPreprocessor,
    max_input_chars: usize,
}

impl LatinProcessor {
    /// Create a new Latin processor with default configuration (embedded lexicon)
    pub fn new() -> Self {
        Self::with_additional_lexicons(&[])
    }

    /// Create a new Latin processor with additional lexicon paths
    pub fn with_additional_lexicons(additional_paths: &[String]) -> Self {
        // Load embedded lexicon
        let mut lexicon = LexiconLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded lexicon: {}", e);
            tracing::warn!("Starting with empty lexicon");
            LatinLexicon::new()
        });

        // Load and merge additional lexicons
        for path in additional_paths {
            match LexiconLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path);
                    lexicon = LexiconLoader::merge(lexicon, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path, e);
                }
            }
        }

        Self::from_lexicon(lexicon)
    }

    pub fn from_lexicon(lexicon: LatinLexicon) -> Self {
        Self {
            lexicon,
            stripper: LatinStemStripper::new(),
            frequency: LatinFrequency::with_defaults(),
            preprocessor: DefaultPreprocessor,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    pub fn with_frequency(mut self, frequency: LatinFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn lexicon(&self) -> &LatinLexicon {
        &self.lexicon
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    fn analyze_token(&self, token: Token) -> AnalysisResult {
        // Try the form table first
        let mut parses = self.lexicon.lookup_form(&token.normalized);

        // If that failed, strip endings and look the stem up
        if parses.is_empty() {
            parses = self.stem_parses(&token.normalized);
        }

        if parses.is_empty() {
            tracing::debug!("No parse for '{}'", token.normalized);
            return AnalysisResult::not_found(token);
        }

        self.rank(&mut parses);

        let mut result = AnalysisResult::new(token, parses, Vec::new());

        // Definitions are keyed by lemma, each fetched once in parse order
        let definitions: Vec<DefinitionEntry> = result
            .lemmas()
            .into_iter()
            .flat_map(|lemma| self.lexicon.definitions(lemma))
            .collect();
        result.definitions = definitions;

        tracing::debug!(
            "Token '{}': {} parses, {} definitions",
            result.token.normalized,
            result.parses.len(),
            result.definitions.len()
        );

        result
    }

    fn stem_parses(&self, word: &str) -> Vec<MorphParse> {
        let mut parses: Vec<MorphParse> = Vec::new();

        for candidate in self.stripper.strip(word) {
            tracing::trace!(
                "Trying {} + -{} as {}",
                candidate.stem,
                candidate.ending,
                candidate.paradigm
            );
            for stem_match in self.lexicon.lookup_stem(&candidate.stem, &candidate.paradigm) {
                let mut parse = MorphParse::new(word, stem_match.lemma, stem_match.part_of_speech)
                    .with_rank(STEM_RANK);
                parse.features = candidate.features.clone();

                if stem_match.part_of_speech == PartOfSpeech::Noun {
                    if let Some(gender) = stem_match.gender {
                        parse.features.entry(Feature::Gender).or_insert(gender);
                    }
                }

                if !parses.contains(&parse) {
                    parses.push(parse);
                }
            }
        }

        parses
    }

    /// Sort by rank, then lemma frequency; the sort is stable so stored order breaks the rest
    fn rank(&self, parses: &mut [MorphParse]) {
        parses.sort_by_key(|parse| {
            (
                parse.rank,
                self.frequency.frequency(&parse.lemma).unwrap_or(u32::MAX),
            )
        });
    }
}

impl Default for LatinProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for LatinProcessor {
    fn language_code(&self) -> &str {
        "la"
    }

    fn normalize(&self, text: &str) -> String {
        self.preprocessor.normalize_word(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .filter_map(|word| {
                let normalized = self.normalize(word);
                if normalized.is_empty() {
                    return None;
                }
                Some((preprocess::strip_punctuation(word), normalized))
            })
            .enumerate()
            .map(|(position, (surface, normalized))| Token::new(surface, normalized, position))
            .collect()
    }

    fn analyze(&self, text: &str) -> Result<AnalysisResult, EngineError> {
        preprocess::validate(text, self.max_input_chars)?;

        let tokens = self.tokenize(text);
        if tokens.is_empty() {
            // Nothing but punctuation
            let surface = self.preprocessor.process(text);
            return Ok(AnalysisResult::not_found(Token::new(surface, "", 0)));
        }

        let surface = tokens
            .iter()
            .map(|t| t.surface.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let normalized = tokens
            .iter()
            .map(|t| t.normalized.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(self.analyze_token(Token::new(surface, normalized, 0)))
    }

    fn analyze_many(&self, text: &str) -> Result<Vec<AnalysisResult>, EngineError> {
        preprocess::validate(text, self.max_input_chars)?;

        let tokens = self.tokenize(text);
        tracing::debug!("Tokenized into {} tokens", tokens.len());

        Ok(tokens
            .into_iter()
            .map(|token| self.analyze_token(token))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use verba_core::error::InputProblem;

    use super::*;

    fn processor() -> LatinProcessor {
        LatinProcessor::new()
    }

    #[test]
    fn test_amo_is_first_person_of_amare() {
        let result = processor().analyze("amo").unwrap();

        assert!(!result.not_found);
        let parse = result
            .parses
            .iter()
            .find(|p| p.lemma == "amare")
            .expect("parse for amare");
        assert_eq!(parse.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(parse.rank, 0);
        assert_eq!(parse.feature(Feature::Person), Some("first"));
        assert_eq!(parse.feature(Feature::Number), Some("singular"));
        assert_eq!(result.definitions[0].short_definition, "to love, like");
    }

    #[test]
    fn test_empty_and_whitespace_input_is_invalid() {
        let p = processor();
        assert_eq!(
            p.analyze(""),
            Err(EngineError::InvalidInput(InputProblem::Empty))
        );
        assert!(p.analyze("   \n\t").unwrap_err().is_invalid_input());
        assert!(p.analyze_many("  ").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_over_long_input_is_invalid() {
        let p = processor().with_max_input_chars(10);
        assert!(matches!(
            p.analyze_many("amo amas amat"),
            Err(EngineError::InvalidInput(InputProblem::TooLong { length: 13, max: 10 }))
        ));
    }

    #[test]
    fn test_unknown_word_is_not_found_not_error() {
        let result = processor().analyze("xyzzy").unwrap();
        assert!(result.not_found);
        assert!(result.parses.is_empty());
        assert!(result.definitions.is_empty());
    }

    #[test]
    fn test_diacritics_and_case_are_ignored() {
        let result = processor().analyze("Rēgīnā!").unwrap();
        assert_eq!(result.token.surface, "Rēgīnā");
        assert_eq!(result.token.normalized, "regina");
        assert!(result.parses.iter().all(|p| p.lemma == "regina"));
    }

    #[test]
    fn test_ambiguous_form_keeps_stored_order() {
        let result = processor().analyze("regina").unwrap();
        let cases: Vec<_> = result
            .parses
            .iter()
            .map(|p| p.feature(Feature::Case).unwrap())
            .collect();
        assert_eq!(cases, vec!["nominative", "vocative", "ablative"]);
    }

    #[test]
    fn test_stem_stripping_gives_lower_confidence_parse() {
        let result = processor().analyze("reginam").unwrap();
        assert!(!result.not_found);

        let parse = &result.parses[0];
        assert_eq!(parse.lemma, "regina");
        assert_eq!(parse.rank, STEM_RANK);
        assert_eq!(parse.feature(Feature::Case), Some("accusative"));
        assert_eq!(parse.feature(Feature::Gender), Some("feminine"));
    }

    #[test]
    fn test_stem_stripping_verb_tenses() {
        let p = processor();

        let result = p.analyze("audiebant").unwrap();
        let parse = &result.parses[0];
        assert_eq!(parse.lemma, "audire");
        assert_eq!(parse.feature(Feature::Tense), Some("imperfect"));
        assert_eq!(parse.feature(Feature::Person), Some("third"));
        assert_eq!(parse.feature(Feature::Number), Some("plural"));

        let result = p.analyze("laudabimus").unwrap();
        assert_eq!(result.parses[0].lemma, "laudare");
        assert_eq!(result.parses[0].feature(Feature::Tense), Some("future"));
    }

    #[test]
    fn test_frequency_breaks_rank_ties_across_lemmas() {
        // "amor" is both a passive of amare and the noun amor
        let result = processor().analyze("amor").unwrap();
        assert!(result.parses.len() >= 2);
        assert_eq!(result.parses[0].lemma, "amare");
        assert!(result.parses.iter().any(|p| p.lemma == "amor"));

        // definitions follow lemma order of the parses
        assert_eq!(result.definitions[0].lemma, "amare");
        assert!(result.definitions.iter().any(|d| d.lemma == "amor"));
    }

    #[test]
    fn test_overlapping_stems_yield_both_lemmas() {
        let result = processor().analyze("regis").unwrap();
        let lemmas = result.lemmas();
        assert!(lemmas.contains(&"rex"));
        assert!(lemmas.contains(&"regere"));
        // rex is more frequent
        assert_eq!(lemmas[0], "rex");
    }

    #[test]
    fn test_analyze_many_keeps_order_and_drops_empty_tokens() {
        let results = processor().analyze_many("Amo -- aquam, regina!").unwrap();

        let normalized: Vec<_> = results.iter().map(|r| r.token.normalized.as_str()).collect();
        assert_eq!(normalized, vec!["amo", "aquam", "regina"]);
        assert_eq!(results[0].token.surface, "Amo");
        assert_eq!(results[1].token.position, 1);
        assert!(results.iter().all(|r| !r.not_found));
    }

    #[test]
    fn test_analyze_punctuation_only_is_not_found() {
        let result = processor().analyze("?!").unwrap();
        assert!(result.not_found);
    }

    #[test]
    fn test_parses_share_surface() {
        let result = processor().analyze("me").unwrap();
        assert_eq!(result.parses.len(), 2);
        assert!(result.parses.iter().all(|p| p.surface == "me"));
    }

    #[test]
    fn test_concurrent_analysis_shares_tables() {
        let processor = Arc::new(processor());
        let handles: Vec<_> = ["amo", "aqua", "regina", "reginam"]
            .into_iter()
            .map(|word| {
                let processor = Arc::clone(&processor);
                std::thread::spawn(move || processor.analyze(word).unwrap())
            })
            .collect();

        for handle in handles {
            assert!(!handle.join().unwrap().not_found);
        }
    }
}
