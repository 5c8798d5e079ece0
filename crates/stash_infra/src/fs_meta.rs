use std::path::Path;

use anyhow::Result;

use crate::FileInfoInfra;

#[derive(Default)]
pub struct StashFileMetaService;

impl StashFileMetaService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for StashFileMetaService {
    async fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(stash_fs::StashFS::is_file(path))
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(stash_fs::StashFS::exists(path))
    }

    async fn file_size(&self, path: &Path) -> Result<u64> {
        stash_fs::StashFS::file_size(path).await
    }
}
