use std::sync::Arc;

use verba_core::dictionary::DefinitionEntry;
use verba_core::{AnalysisResult, LanguageProcessor};
use verba_store::UserStore;
use verba_types::{HistoryEntry, TranslationResult};

use crate::grammar::{describe, describe_many};
use crate::{ProviderMetadata, TranslateError, Translator};

/// Turns engine analyses into translations and records them in history
pub struct Orchestrator {
    processor: Arc<dyn LanguageProcessor>,
    history: Option<Arc<UserStore>>,
}

impl Orchestrator {
    pub fn new(processor: Arc<dyn LanguageProcessor>) -> Self {
        Self {
            processor,
            history: None,
        }
    }

    pub fn with_history(mut self, store: Arc<UserStore>) -> Self {
        self.history = Some(store);
        self
    }

    /// Grammar description for single words or whole phrases
    pub fn grammar(&self, text: &str) -> Result<String, TranslateError> {
        let results = self.processor.analyze_many(text)?;
        Ok(match results.as_slice() {
            [single] => describe(single),
            many => describe_many(many),
        })
    }

    async fn record(&self, result: &TranslationResult) {
        let Some(store) = &self.history else {
            return;
        };

        let entry = HistoryEntry::now(&result.source_text, &result.primary_translation);
        if let Err(e) = store.append_history(entry).await {
            tracing::warn!("Failed to record history for {:?}: {}", result.source_text, e);
        }
    }
}

#[async_trait::async_trait]
impl Translator for Orchestrator {
    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        let results = self.processor.analyze_many(text)?;
        let result = compose(text, &results);
        tracing::debug!(
            "Translated {} tokens of {:?} -> {:?}",
            results.len(),
            text,
            result.primary_translation
        );

        self.record(&result).await;
        Ok(result)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Verba lexicon".to_string(),
            from: self.processor.language_code().to_string(),
            to: "en".to_string(),
        }
    }
}

pub fn not_found_message(text: &str) -> String {
    format!("No translation found for \"{text}\"")
}

/// Build a translation from per-token analyses.
///
/// Each token contributes its best sense to the primary translation and its
/// remaining senses to `alternatives`, prefixed with the token surface.
pub fn compose(text: &str, results: &[AnalysisResult]) -> TranslationResult {
    let mut glosses = Vec::new();
    let mut alternatives = Vec::new();

    for result in results {
        let senses = ranked_senses(&result.definitions);
        let Some((best, rest)) = senses.split_first() else {
            continue;
        };

        glosses.push(best.short_definition.as_str());
        alternatives.extend(
            rest.iter()
                .map(|sense| format!("{}: {}", result.token.surface, sense.short_definition)),
        );
    }

    let primary_translation = if glosses.is_empty() {
        not_found_message(text)
    } else {
        glosses.join("; ")
    };

    TranslationResult {
        primary_translation,
        alternatives,
        source_text: text.to_string(),
    }
}

/// Stable sort, so equal sense ranks keep stored order
fn ranked_senses(definitions: &[DefinitionEntry]) -> Vec<&DefinitionEntry> {
    let mut senses: Vec<&DefinitionEntry> = definitions.iter().collect();
    senses.sort_by_key(|d| d.sense_rank);
    senses
}
