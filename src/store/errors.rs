//! Error types for the glossary record store
//!
//! [`StoreError`] covers every way loading, adding or saving can fail. The UI
//! reports these as notices; none of them are fatal to the process.

use std::io;
use std::path::{Path, PathBuf};

/// Errors produced by [`WordList`](super::WordList)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file exists but could not be opened, read or written
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file is not valid UTF-8 CSV, or a record failed to serialize
    #[error("CSV error in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The word (first column) was empty after trimming
    #[error("word must not be empty")]
    EmptyWord,
}

impl StoreError {
    pub(super) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(super) fn csv(path: &Path, source: csv::Error) -> Self {
        StoreError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used throughout the store
pub type StoreResult<T> = Result<T, StoreError>;
