use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;

impl crate::StashFS {
    /// Writes the given content to a file, replacing any existing content.
    pub async fn write<T: AsRef<Path>, U: AsRef<[u8]>>(path: T, contents: U) -> Result<()> {
        let path_ref = path.as_ref();
        tokio::fs::write(path_ref, contents)
            .await
            .with_context(|| format!("Failed to write file {}", path_ref.display()))
    }

    /// Appends the given content to a file, creating it if it does not
    /// exist.
    pub async fn append<T: AsRef<Path>, U: AsRef<[u8]>>(path: T, contents: U) -> Result<()> {
        let path_ref = path.as_ref();
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path_ref)
            .await
            .with_context(|| format!("Failed to open file {}", path_ref.display()))?;
        file.write_all(contents.as_ref())
            .await
            .with_context(|| format!("Failed to append to file {}", path_ref.display()))?;
        Ok(())
    }
}
