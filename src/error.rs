//! Error types for navigation commands.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single navigation command. None of them leave state behind.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("Folder has no files to open: {}", .0.display())]
    EmptyFolder(PathBuf),

    #[error("Unsupported sort order: {0:?}")]
    UnsupportedSortMode(String),
}
