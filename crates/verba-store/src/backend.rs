//! Key-value backends holding one JSON value per key.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use verba_config::StorageBackend;
use verba_config::storage::StorageConfig;

use crate::error::StoreError;

/// Persistence interface behind the history and vocabulary lists
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `None` when nothing was ever written under `key`
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Build the backend selected in config
pub fn open_backend(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => {
            let store = JsonFileStore::new(&config.directory);
            tracing::info!("Storing user data in {}", store.directory().display());
            Arc::new(store)
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// One `<key>.json` file per key inside a directory
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.directory).await?;

        // Readers never see a half-written file
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&value)?;
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Wrote {} to {}", key, path.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("verba-store-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_memory_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("latinTranslatorHistory").await.unwrap(), None);

        store.set("k", json!([1, 2])).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!([1, 2])));
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = scratch_dir();
        JsonFileStore::new(&dir)
            .set("latinTranslatorVocabulary", json!([{ "word": "amo" }]))
            .await
            .unwrap();

        let reopened = JsonFileStore::new(&dir);
        let value = reopened.get("latinTranslatorVocabulary").await.unwrap();
        assert_eq!(value, Some(json!([{ "word": "amo" }])));
        assert!(!dir.join("latinTranslatorVocabulary.json.tmp").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_file_store_reports_corrupt_json() {
        let dir = scratch_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("broken.json"), "[{ not json").unwrap();

        let result = JsonFileStore::new(&dir).get("broken").await;
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_like_keys() {
        let store = JsonFileStore::new(scratch_dir());
        let result = store.set("../escape", json!(null)).await;
        assert!(matches!(result, Err(StoreError::InvalidKey(_))));
    }
}
