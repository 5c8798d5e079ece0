use std::path::{Path, PathBuf};

use anyhow::Result;
use futures::future::join_all;
use glob::Pattern;
use stash_fs::StashFS;

use crate::DirectoryReaderInfra;

/// Service for reading multiple files from a directory asynchronously
pub struct StashDirectoryReaderService;

impl StashDirectoryReaderService {
    /// Lists all immediate entries of a directory as (path, is_directory)
    /// pairs. Symlinks report the type of the link itself.
    async fn list_directory_entries(&self, directory: &Path) -> Result<Vec<(PathBuf, bool)>> {
        let mut dir = StashFS::read_dir(directory).await?;
        let mut entries = Vec::new();

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            let is_dir = entry.file_type().await?.is_dir();
            entries.push((path, is_dir));
        }

        Ok(entries)
    }

    /// Reads every non-directory entry whose name matches the optional glob
    /// pattern, fanning the reads out concurrently. Entries that cannot be
    /// read as text are dropped from the result.
    async fn read_directory_files(
        &self,
        directory: &Path,
        pattern: Option<&str>,
    ) -> Result<Vec<(PathBuf, String)>> {
        // A missing or non-directory path yields an empty listing
        if !StashFS::exists(directory) || StashFS::is_file(directory) {
            return Ok(vec![]);
        }

        let filter = pattern.map(Pattern::new).transpose()?;

        let candidates = self
            .list_directory_entries(directory)
            .await?
            .into_iter()
            .filter(|(_, is_dir)| !*is_dir)
            .filter(|(path, _)| match &filter {
                Some(filter) => path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| filter.matches(name)),
                None => true,
            })
            .map(|(path, _)| path);

        let contents = join_all(candidates.map(|path| async move {
            let content = StashFS::read_utf8(&path).await.ok()?;
            Some((path, content))
        }))
        .await;

        Ok(contents.into_iter().flatten().collect())
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for StashDirectoryReaderService {
    async fn list_directory_entries(&self, directory: &Path) -> Result<Vec<(PathBuf, bool)>> {
        self.list_directory_entries(directory).await
    }

    async fn read_directory_files(
        &self,
        directory: &Path,
        pattern: Option<&str>,
    ) -> Result<Vec<(PathBuf, String)>> {
        self.read_directory_files(directory, pattern).await
    }
}
