//! # StashFS
//!
//! A file system abstraction layer that standardizes error handling for file
//! operations.
//!
//! StashFS wraps tokio's filesystem operations with consistent error context
//! using anyhow::Context. Each method provides standardized error messages in
//! the format "Failed to [operation] [path]", ensuring uniform error reporting
//! throughout the application while preserving the original error cause.

mod create_dirs;
mod error;
mod meta;
mod read;
mod remove;
mod write;

pub use crate::error::Error;

/// StashFS provides a standardized interface for file system operations
/// with consistent error handling.
#[derive(Debug)]
pub struct StashFS;
