use std::path::Path;

use crate::FileDirectoryInfra;

#[derive(Default)]
pub struct StashCreateDirsService;

impl StashCreateDirsService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileDirectoryInfra for StashCreateDirsService {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        Ok(stash_fs::StashFS::create_dir_all(path).await?)
    }
}
