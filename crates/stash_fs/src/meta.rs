use std::path::Path;

use anyhow::{Context, Result};

impl crate::StashFS {
    pub fn exists<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().exists()
    }

    pub fn is_file<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_file()
    }

    pub async fn file_size<T: AsRef<Path>>(path: T) -> Result<u64> {
        let path_ref = path.as_ref();
        let metadata = tokio::fs::metadata(path_ref)
            .await
            .with_context(|| format!("Failed to get metadata for {}", path_ref.display()))?;
        Ok(metadata.len())
    }

    pub async fn read_dir<T: AsRef<Path>>(path: T) -> Result<tokio::fs::ReadDir> {
        tokio::fs::read_dir(path.as_ref())
            .await
            .with_context(|| format!("Failed to read directory {}", path.as_ref().display()))
    }
}
