mod stdio_tests;

use std::sync::Arc;

use verba_config::{Config, StorageBackend};

use crate::state::AppState;

/// Engine with the embedded lexicon over an in-memory store
pub(crate) fn memory_state() -> Arc<AppState> {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    Arc::new(AppState::new(config))
}
