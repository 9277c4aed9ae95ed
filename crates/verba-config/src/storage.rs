use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_backend() -> StorageBackend {
    StorageBackend::File
}

fn default_directory() -> PathBuf {
    PathBuf::from("data/store")
}

fn default_namespace() -> String {
    "latinTranslator".to_string()
}

fn default_history_capacity() -> usize {
    20
}

fn default_vocabulary_capacity() -> usize {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    /// Directory holding one JSON file per key (file backend only)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Key prefix, one per deployment
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_vocabulary_capacity")]
    pub vocabulary_capacity: usize,
}

impl StorageConfig {
    pub fn new() -> Self {
        let backend = match env::var("VERBA_STORAGE").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            _ => default_backend(),
        };

        let directory = env::var("VERBA_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_directory());

        let namespace = env::var("VERBA_NAMESPACE").unwrap_or_else(|_| default_namespace());

        Self {
            backend,
            directory,
            namespace,
            ..Self::default()
        }
    }

    pub fn history_key(&self) -> String {
        format!("{}History", self.namespace)
    }

    pub fn vocabulary_key(&self) -> String {
        format!("{}Vocabulary", self.namespace)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            directory: default_directory(),
            namespace: default_namespace(),
            history_capacity: default_history_capacity(),
            vocabulary_capacity: default_vocabulary_capacity(),
        }
    }
}
