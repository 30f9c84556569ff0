use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use async_trait::async_trait;
use blog_core::{BlogError, BlogResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const FORMAT_VERSION: u32 = 1;

/// JSON file-backed key-value store.
///
/// Every read goes to disk, so separate instances pointed at the same file
/// observe each other's writes. Writes within one instance are serialized.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// On-disk layout of the store file.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl JsonEnvelope {
    pub fn empty() -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            entries: BTreeMap::new(),
        }
    }
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> BlogResult<JsonEnvelope> {
        let Some(bytes) = AtomicWriter::read_optional(&self.path).await? else {
            return Ok(JsonEnvelope::empty());
        };

        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| BlogError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(BlogError::Serialization(format!(
                "Unsupported store format version: {}",
                envelope.version
            )));
        }

        Ok(envelope)
    }

    async fn save(&self, mut envelope: JsonEnvelope) -> BlogResult<()> {
        envelope.saved_at = Utc::now();
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| BlogError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} entries ({} bytes) to {}",
            envelope.entries.len(),
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> BlogResult<Option<String>> {
        let envelope = self.load().await?;
        Ok(envelope.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> BlogResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut envelope = self.load().await?;
        envelope.entries.insert(key.to_string(), value);
        self.save(envelope).await
    }

    async fn remove(&self, key: &str) -> BlogResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut envelope = self.load().await?;
        if envelope.entries.remove(key).is_some() {
            self.save(envelope).await?;
        }
        Ok(())
    }
}
