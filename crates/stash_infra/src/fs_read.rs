use std::path::Path;

use anyhow::Result;

use crate::FileReaderInfra;

pub struct StashFileReadService;

impl Default for StashFileReadService {
    fn default() -> Self {
        Self
    }
}

impl StashFileReadService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for StashFileReadService {
    async fn read_utf8(&self, path: &Path) -> Result<String> {
        stash_fs::StashFS::read_utf8(path).await
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        stash_fs::StashFS::read(path).await
    }
}
