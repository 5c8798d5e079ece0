use std::path::Path;

use crate::FileRemoverInfra;

/// Low-level file remove service
///
/// Provides primitive deletion operations without any undo coordination.
/// Recovery strategies (snapshots, staging) belong to the caller.
#[derive(Default)]
pub struct StashFileRemoveService;

impl StashFileRemoveService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for StashFileRemoveService {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        Ok(stash_fs::StashFS::remove_file(path).await?)
    }

    async fn remove_all(&self, path: &Path) -> anyhow::Result<()> {
        tracing::debug!(path = %path.display(), "Removing path recursively");
        Ok(stash_fs::StashFS::remove_all(path).await?)
    }
}
