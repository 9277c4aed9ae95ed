use verba_core::EngineError;
use verba_types::TranslationResult;

pub mod grammar;
pub mod orchestrator;

pub use grammar::{NO_GRAMMAR, describe, describe_many};
pub use orchestrator::{Orchestrator, compose, not_found_message};

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate source text into English glosses
    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl TranslateError {
    pub fn is_invalid_input(&self) -> bool {
        match self {
            TranslateError::Engine(e) => e.is_invalid_input(),
        }
    }
}
