use crate::traits::KeyValueStore;
use async_trait::async_trait;
use blog_core::BlogResult;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-process key-value store. Nothing outlives the instance.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> BlogResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> BlogResult<()> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> BlogResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("k", "v".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.remove("k").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_list_on_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(store.get_list("blogs").await.unwrap().is_empty());

        store.prepend_to_list("blogs", json!("x")).await.unwrap();
        assert_eq!(store.get_list("blogs").await.unwrap(), vec![json!("x")]);
    }
}
