use blog_core::{BlogError, BlogResult};
use std::path::Path;
use tokio::fs;

/// Atomic file writer that prevents torn store files.
/// Uses write-to-temp-file then rename.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating parent directories as needed.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> BlogResult<()> {
        // Temp file must live on the same filesystem for the rename to be atomic
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;

        fs::write(temp_file.path(), data).await?;

        temp_file
            .persist(path)
            .map_err(|e| BlogError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file, or `None` when it does not exist.
    pub async fn read_optional(path: &Path) -> BlogResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
