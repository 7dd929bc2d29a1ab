//! Persistent storage
//!
//! Only user preferences are persisted; conversations live and die with
//! the mounted widget.

pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing local files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

/// Application data directory, e.g. `~/.local/share/jarvis` on Linux.
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "technova", "jarvis")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
