//! File access behind a narrow trait so the session can be tested
//! without touching the real filesystem.

use std::io;
use std::path::{Path, PathBuf};

/// A failure reading or writing a document file.
///
/// Always carries the path so the error can be surfaced to the user
/// verbatim. No retries happen at this layer.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file not found: {}", path.display())]
    Missing { path: PathBuf },
}

impl FileError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Missing { path } => path,
        }
    }
}

/// Reads and writes whole document files.
pub trait FileStore {
    /// Read the full contents of a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Read`] if the path is missing, unreadable,
    /// or not valid UTF-8.
    fn read(&self, path: &Path) -> Result<String, FileError>;

    /// Write `text` to `path`, replacing any existing contents.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Write`] on any write failure.
    fn write(&self, path: &Path, text: &str) -> Result<(), FileError>;

    /// Whether a file currently exists at `path`.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// The one real [`FileStore`]: plain blocking filesystem calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> Result<String, FileError> {
        std::fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, text: &str) -> Result<(), FileError> {
        std::fs::write(path, text).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
