use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use async_recursion::async_recursion;

use crate::Error;

impl crate::StashFS {
    /// Removes a single file (or symlink).
    pub async fn remove_file<T: AsRef<Path>>(path: T) -> Result<()> {
        let path_ref = path.as_ref();
        tokio::fs::remove_file(path_ref)
            .await
            .with_context(|| format!("Failed to remove file {}", path_ref.display()))
    }

    /// Removes an empty directory.
    pub async fn remove_dir<T: AsRef<Path>>(path: T) -> Result<()> {
        let path_ref = path.as_ref();
        tokio::fs::remove_dir(path_ref).await.map_err(|err| {
            if err.kind() == ErrorKind::DirectoryNotEmpty {
                Error::not_empty(path_ref).into()
            } else {
                anyhow::Error::new(err)
                    .context(format!("Failed to remove directory {}", path_ref.display()))
            }
        })
    }

    /// Removes a file or an entire directory tree.
    ///
    /// The target is classified without following symlinks: a symlink found
    /// anywhere in the tree is removed as a leaf and its target is left
    /// untouched. Directory contents are removed depth-first, so a directory
    /// is only removed once every one of its entries is gone. The first
    /// failure aborts the walk and propagates; entries not yet visited and
    /// every ancestor directory are left in place.
    ///
    /// Calling this on a path that does not exist fails with
    /// [`Error::NotFound`] rather than succeeding silently. Callers wanting
    /// "remove if present" semantics must check [`StashFS::exists`] first.
    ///
    /// [`StashFS::exists`]: crate::StashFS::exists
    pub async fn remove_all<T: AsRef<Path>>(path: T) -> Result<()> {
        Self::remove_all_inner(path.as_ref()).await
    }

    #[async_recursion]
    async fn remove_all_inner(path: &Path) -> Result<()> {
        let metadata = match tokio::fs::symlink_metadata(path).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::not_found(path).into());
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("Failed to get metadata for {}", path.display())));
            }
        };

        if !metadata.is_dir() {
            return Self::remove_file(path).await;
        }

        let mut entries = Self::read_dir(path).await?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read directory {}", path.display()))?
        {
            Self::remove_all_inner(&entry.path()).await?;
        }

        Self::remove_dir(path).await
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tokio::fs;

    use crate::{Error, StashFS};

    #[tokio::test]
    async fn test_remove_file_deletes_the_file() -> Result<()> {
        let fixture = tempdir()?;
        let path = fixture.path().join("temp.txt");
        fs::write(&path, "Delete me.\n").await?;

        StashFS::remove_file(&path).await?;

        assert_eq!(StashFS::exists(&path), false);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_dir_on_non_empty_directory_is_not_empty() -> Result<()> {
        let fixture = tempdir()?;
        fs::write(fixture.path().join("a.txt"), "aaa").await?;

        let actual = StashFS::remove_dir(fixture.path()).await;

        let err = actual.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotEmpty { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_all_on_file() -> Result<()> {
        let fixture = tempdir()?;
        let path = fixture.path().join("temp.txt");
        fs::write(&path, "test123").await?;

        StashFS::remove_all(&path).await?;

        assert_eq!(StashFS::exists(&path), false);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_all_on_empty_directory() -> Result<()> {
        let fixture = tempdir()?;
        let path = fixture.path().join("empty");
        fs::create_dir(&path).await?;

        StashFS::remove_all(&path).await?;

        assert_eq!(StashFS::exists(&path), false);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_all_on_nested_tree() -> Result<()> {
        let fixture = tempdir()?;
        let root = fixture.path().join("root");
        let dir2 = root.join("dir1").join("dir2");
        let dir3 = root.join("dir3");
        fs::create_dir_all(&dir2).await?;
        fs::create_dir_all(&dir3).await?;
        fs::write(root.join("a.txt"), "aaa").await?;
        fs::write(dir2.join("b.txt"), "bbb").await?;
        fs::write(dir3.join("c.txt"), "ccc").await?;
        fs::write(dir3.join("d.txt"), "ddd").await?;
        fs::write(dir3.join("e.txt"), "eee").await?;
        fs::write(dir3.join("f.txt"), "fff").await?;
        fs::write(dir2.join("g.txt"), "ggg").await?;

        StashFS::remove_all(&root).await?;

        assert_eq!(StashFS::exists(&root), false);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_all_on_missing_path_is_not_found() -> Result<()> {
        let fixture = tempdir()?;
        let path = fixture.path().join("nonexistent");

        let actual = StashFS::remove_all(&path).await;

        let err = actual.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_all_twice_fails_the_second_time() -> Result<()> {
        let fixture = tempdir()?;
        let path = fixture.path().join("once");
        fs::create_dir(&path).await?;
        fs::write(path.join("a.txt"), "aaa").await?;

        StashFS::remove_all(&path).await?;
        let actual = StashFS::remove_all(&path).await;

        let err = actual.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_remove_all_does_not_follow_symlinks() -> Result<()> {
        let fixture = tempdir()?;
        let target = fixture.path().join("target");
        fs::create_dir(&target).await?;
        fs::write(target.join("keep.txt"), "keep").await?;

        let root = fixture.path().join("root");
        fs::create_dir(&root).await?;
        fs::symlink(&target, root.join("link")).await?;

        StashFS::remove_all(&root).await?;

        assert_eq!(StashFS::exists(&root), false);
        assert_eq!(StashFS::exists(target.join("keep.txt")), true);
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_remove_all_leaves_parent_when_entry_is_unremovable() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let fixture = tempdir()?;
        let root = fixture.path().join("root");
        let locked = root.join("locked");
        fs::create_dir_all(&locked).await?;
        fs::write(locked.join("pinned.txt"), "pinned").await?;
        fs::write(locked.join("canary.txt"), "canary").await?;

        let mut perms = fs::metadata(&locked).await?.permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&locked, perms.clone()).await?;

        // Permission bits don't constrain privileged users, so confirm the
        // lock actually holds before asserting anything
        if std::fs::remove_file(locked.join("canary.txt")).is_ok() {
            perms.set_mode(0o755);
            fs::set_permissions(&locked, perms).await?;
            return Ok(());
        }

        let actual = StashFS::remove_all(&root).await;

        assert!(actual.is_err());
        assert_eq!(StashFS::exists(&root), true);
        assert_eq!(StashFS::exists(locked.join("pinned.txt")), true);

        perms.set_mode(0o755);
        fs::set_permissions(&locked, perms).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_all_on_deeply_nested_directories() -> Result<()> {
        let fixture = tempdir()?;
        let mut path = fixture.path().join("d0");
        for depth in 1..=32 {
            path = path.join(format!("d{depth}"));
        }
        fs::create_dir_all(&path).await?;
        fs::write(path.join("leaf.txt"), "leaf").await?;

        let root = fixture.path().join("d0");
        StashFS::remove_all(&root).await?;

        assert_eq!(StashFS::exists(&root), false);
        Ok(())
    }
}
