use std::path::Path;

use bytes::Bytes;

use crate::FileWriterInfra;

/// Low-level file write service
///
/// Provides primitive file write operations. Missing parent directories are
/// created before the first write to a path.
pub struct StashFileWriteService;

impl StashFileWriteService {
    pub fn new() -> Self {
        Self
    }

    /// Creates parent directories for the given file path if they don't exist
    async fn create_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if !stash_fs::StashFS::exists(path)
            && let Some(parent) = path.parent()
        {
            stash_fs::StashFS::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

impl Default for StashFileWriteService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for StashFileWriteService {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.create_parent_dirs(path).await?;
        Ok(stash_fs::StashFS::write(path, contents.to_vec()).await?)
    }

    async fn append(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.create_parent_dirs(path).await?;
        Ok(stash_fs::StashFS::append(path, contents.to_vec()).await?)
    }
}
