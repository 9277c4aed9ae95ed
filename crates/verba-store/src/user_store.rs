//! History and vocabulary lists kept most-recent-first under capacity caps.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use verba_config::storage::StorageConfig;
use verba_types::{HistoryEntry, VocabularyEntry, VocabularyOutcome};

use crate::backend::KeyValueStore;
use crate::error::StoreError;

pub const DUPLICATE_REASON: &str = "Item already exists";
pub const EMPTY_WORD_REASON: &str = "Word must not be empty";

/// One capped list stored under a single key
struct BoundedList {
    key: String,
    capacity: usize,
    // Serializes read-modify-write cycles on this key
    lock: Mutex<()>,
}

impl BoundedList {
    fn new(key: String, capacity: usize) -> Self {
        Self {
            key,
            capacity,
            lock: Mutex::new(()),
        }
    }
}

pub struct UserStore {
    backend: Arc<dyn KeyValueStore>,
    history: BoundedList,
    vocabulary: BoundedList,
}

impl UserStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, config: &StorageConfig) -> Self {
        tracing::info!(
            "User store on {} backend, keys {} / {}",
            backend.name(),
            config.history_key(),
            config.vocabulary_key()
        );
        Self {
            backend,
            history: BoundedList::new(config.history_key(), config.history_capacity),
            vocabulary: BoundedList::new(config.vocabulary_key(), config.vocabulary_capacity),
        }
    }

    /// Insert at the front, dropping the oldest entries past capacity
    pub async fn append_history(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let _guard = self.history.lock.lock().await;
        let mut entries: Vec<HistoryEntry> = self.read(&self.history.key).await?;
        entries.insert(0, entry);
        entries.truncate(self.history.capacity);
        self.write(&self.history.key, &entries).await
    }

    pub async fn list_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        self.read(&self.history.key).await
    }

    /// Words are unique ignoring case; a duplicate is reported, not an error
    pub async fn add_vocabulary(
        &self,
        entry: VocabularyEntry,
    ) -> Result<VocabularyOutcome, StoreError> {
        if entry.word.trim().is_empty() {
            return Ok(VocabularyOutcome::rejected(EMPTY_WORD_REASON));
        }

        let _guard = self.vocabulary.lock.lock().await;
        let mut entries: Vec<VocabularyEntry> = self.read(&self.vocabulary.key).await?;
        if entries.iter().any(|existing| existing.same_word(&entry)) {
            tracing::debug!("Vocabulary already has {:?}", entry.word);
            return Ok(VocabularyOutcome::rejected(DUPLICATE_REASON));
        }

        entries.insert(0, entry);
        entries.truncate(self.vocabulary.capacity);
        self.write(&self.vocabulary.key, &entries).await?;
        Ok(VocabularyOutcome::inserted())
    }

    pub async fn list_vocabulary(&self) -> Result<Vec<VocabularyEntry>, StoreError> {
        self.read(&self.vocabulary.key).await
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.backend.get(key).await? {
            None => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn write<T: Serialize>(&self, key: &str, entries: &[T]) -> Result<(), StoreError> {
        let value = serde_json::to_value(entries)?;
        self.backend.set(key, value).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::backend::{JsonFileStore, MemoryStore};

    fn memory_store() -> UserStore {
        UserStore::new(Arc::new(MemoryStore::new()), &StorageConfig::default())
    }

    #[tokio::test]
    async fn test_history_keeps_twenty_most_recent() {
        let store = memory_store();
        for i in 0..25 {
            store
                .append_history(HistoryEntry::now(format!("word{i}"), format!("t{i}")))
                .await
                .unwrap();
        }

        let history = store.list_history().await.unwrap();
        assert_eq!(history.len(), 20);
        assert_eq!(history[0].original, "word24");
        assert_eq!(history[19].original, "word5");
    }

    #[tokio::test]
    async fn test_vocabulary_dedup_ignores_case() {
        let store = memory_store();
        let first = store
            .add_vocabulary(VocabularyEntry::new("amo", "y"))
            .await
            .unwrap();
        assert!(first.inserted);

        let second = store
            .add_vocabulary(VocabularyEntry::new("Amo", "x"))
            .await
            .unwrap();
        assert!(!second.inserted);
        assert_eq!(second.reason.as_deref(), Some(DUPLICATE_REASON));

        let vocabulary = store.list_vocabulary().await.unwrap();
        assert_eq!(vocabulary, vec![VocabularyEntry::new("amo", "y")]);
    }

    #[tokio::test]
    async fn test_added_word_is_listed_first() {
        let store = memory_store();
        store
            .add_vocabulary(VocabularyEntry::new("aqua", "water"))
            .await
            .unwrap();
        let entry = VocabularyEntry::new("regina", "queen");
        store.add_vocabulary(entry.clone()).await.unwrap();

        let vocabulary = store.list_vocabulary().await.unwrap();
        assert_eq!(vocabulary[0], entry);
        assert_eq!(vocabulary.len(), 2);
    }

    #[tokio::test]
    async fn test_vocabulary_capacity_from_config() {
        let config = StorageConfig {
            vocabulary_capacity: 3,
            ..StorageConfig::default()
        };
        let store = UserStore::new(Arc::new(MemoryStore::new()), &config);
        for word in ["a", "b", "c", "d"] {
            store
                .add_vocabulary(VocabularyEntry::new(word, "-"))
                .await
                .unwrap();
        }

        let words: Vec<String> = store
            .list_vocabulary()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, vec!["d", "c", "b"]);
    }

    #[tokio::test]
    async fn test_blank_word_rejected() {
        let store = memory_store();
        let outcome = store
            .add_vocabulary(VocabularyEntry::new("  ", "nothing"))
            .await
            .unwrap();
        assert!(!outcome.inserted);
        assert!(store.list_vocabulary().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_lose_nothing() {
        let store = Arc::new(memory_store());
        let mut handles = Vec::new();
        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .append_history(HistoryEntry::now(format!("w{i}"), "t"))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.list_history().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_corrupt_list_is_an_error_not_empty() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set("latinTranslatorHistory", json!({ "not": "a list" }))
            .await
            .unwrap();

        let store = UserStore::new(backend, &StorageConfig::default());
        assert!(matches!(
            store.list_history().await,
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[tokio::test]
    async fn test_file_backend_round_trip() {
        let dir = std::env::temp_dir().join(format!("verba-user-{}", uuid::Uuid::new_v4()));
        let config = StorageConfig::default();

        let store = UserStore::new(Arc::new(JsonFileStore::new(&dir)), &config);
        store
            .add_vocabulary(VocabularyEntry::new("aqua", "water"))
            .await
            .unwrap();
        drop(store);

        let reopened = UserStore::new(Arc::new(JsonFileStore::new(&dir)), &config);
        assert_eq!(
            reopened.list_vocabulary().await.unwrap(),
            vec![VocabularyEntry::new("aqua", "water")]
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
