use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure conditions callers are expected to match on.
///
/// Everything else (permission denied, resource busy, unknown I/O failures)
/// propagates as the underlying platform error wrapped with anyhow context.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Path {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("Directory {} is not empty", path.display())]
    NotEmpty { path: PathBuf },
}

impl Error {
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound { path: path.as_ref().to_path_buf() }
    }

    pub fn not_empty(path: impl AsRef<Path>) -> Self {
        Self::NotEmpty { path: path.as_ref().to_path_buf() }
    }
}
