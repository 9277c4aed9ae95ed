//! Plain-text rendering of morphological parses.

use verba_core::{AnalysisResult, Feature, MorphParse};

pub const NO_GRAMMAR: &str = "No grammatical information available.";

const PARSE_SEPARATOR: &str = "\n---\n";

/// Render every parse of one token, in rank order
pub fn describe(result: &AnalysisResult) -> String {
    if result.parses.is_empty() {
        return NO_GRAMMAR.to_string();
    }

    result
        .parses
        .iter()
        .map(describe_parse)
        .collect::<Vec<_>>()
        .join(PARSE_SEPARATOR)
}

/// One block per token, headed by the word as typed
pub fn describe_many(results: &[AnalysisResult]) -> String {
    if results.is_empty() {
        return NO_GRAMMAR.to_string();
    }

    results
        .iter()
        .map(|result| format!("{}:\n{}", result.token.surface, describe(result)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn describe_parse(parse: &MorphParse) -> String {
    let features = Feature::CANONICAL_ORDER
        .iter()
        .filter_map(|feature| parse.feature(*feature).map(|value| format!("{feature}: {value}")))
        .collect::<Vec<_>>();
    let features = if features.is_empty() {
        "none".to_string()
    } else {
        features.join(", ")
    };

    format!(
        "Lemma: {}, Part: {}, Features: {}",
        parse.lemma, parse.part_of_speech, features
    )
}
