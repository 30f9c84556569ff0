use async_trait::async_trait;
use blog_core::{BlogError, BlogResult};

/// String key-value storage, the local equivalent of browser storage.
///
/// Implementations only need `get`, `set` and `remove`; list helpers are
/// built on top of them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> BlogResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> BlogResult<()>;

    /// Delete `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> BlogResult<()>;

    /// Read the JSON array stored under `key`. A missing key is an empty list.
    async fn get_list(&self, key: &str) -> BlogResult<Vec<serde_json::Value>> {
        match self.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| BlogError::Serialization(format!("{}: {}", key, e))),
            None => Ok(Vec::new()),
        }
    }

    /// Insert `value` at the front of the JSON array stored under `key`,
    /// so the newest entry is first.
    async fn prepend_to_list(&self, key: &str, value: serde_json::Value) -> BlogResult<usize> {
        let mut list = self.get_list(key).await?;
        list.insert(0, value);
        let len = list.len();
        let raw = serde_json::to_string(&list)
            .map_err(|e| BlogError::Serialization(e.to_string()))?;
        self.set(key, raw).await?;
        Ok(len)
    }
}
