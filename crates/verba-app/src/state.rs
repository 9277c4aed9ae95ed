use std::sync::Arc;

use tokio::sync::RwLock;
use verba_config::Config;
use verba_config::engine::EngineConfig;
use verba_core::LanguageProcessor;
use verba_core::dictionary::Lexicon;
use verba_lang_latin::{LatinFrequency, LatinProcessor};
use verba_store::{UserStore, open_backend};
use verba_translator::{Orchestrator, Translator};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub orchestrator: Arc<Orchestrator>,
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let processor = build_processor(&config.engine);
        let store = Arc::new(UserStore::new(
            open_backend(&config.storage),
            &config.storage,
        ));
        Self::with_parts(config, processor, store)
    }

    /// Wire already built parts; the orchestrator records into `store`
    pub fn with_parts(
        config: Config,
        processor: Arc<dyn LanguageProcessor>,
        store: Arc<UserStore>,
    ) -> Self {
        let orchestrator = Orchestrator::new(processor).with_history(Arc::clone(&store));
        let metadata = orchestrator.metadata();
        tracing::info!(
            "Translator ready: {} ({} -> {})",
            metadata.name,
            metadata.from,
            metadata.to
        );

        Self {
            config: Arc::new(RwLock::new(config)),
            orchestrator: Arc::new(orchestrator),
            store,
        }
    }
}

fn build_processor(config: &EngineConfig) -> Arc<dyn LanguageProcessor> {
    let mut processor = LatinProcessor::with_additional_lexicons(&config.additional_lexicons)
        .with_max_input_chars(config.max_input_chars);

    let metadata = processor.lexicon().metadata();
    tracing::info!(
        "{} v{}: {} entries, {} forms",
        metadata.name,
        metadata.version,
        metadata.entry_count,
        metadata.form_count
    );

    if let Some(path) = &config.frequency_list {
        match LatinFrequency::load_from_file(path) {
            Ok(frequency) => {
                tracing::info!("Loaded {} frequency ranks from {}", frequency.len(), path);
                processor = processor.with_frequency(frequency);
            }
            Err(e) => {
                tracing::warn!("Failed to load frequency list {}: {}, using defaults", path, e);
            }
        }
    }

    Arc::new(processor)
}
