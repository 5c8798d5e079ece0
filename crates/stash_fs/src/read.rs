use std::path::Path;

use anyhow::{Context, Result};

impl crate::StashFS {
    /// Reads the entire content of a file as raw bytes.
    pub async fn read<T: AsRef<Path>>(path: T) -> Result<Vec<u8>> {
        let path_ref = path.as_ref();
        tokio::fs::read(path_ref)
            .await
            .with_context(|| format!("Failed to read file {}", path_ref.display()))
    }

    /// Reads the entire content of a file as a UTF-8 string. Invalid byte
    /// sequences are replaced rather than rejected.
    pub async fn read_utf8<T: AsRef<Path>>(path: T) -> Result<String> {
        let bytes = Self::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
