use std::path::Path;

use anyhow::{Context, Result};

impl crate::StashFS {
    /// Creates a directory and all of its missing parents.
    pub async fn create_dir_all<T: AsRef<Path>>(path: T) -> Result<()> {
        tokio::fs::create_dir_all(path.as_ref())
            .await
            .with_context(|| format!("Failed to create directory {}", path.as_ref().display()))
    }
}
