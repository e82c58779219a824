//! Image source resolution.
//!
//! An [`ImageSource`] names where the input bytes come from. Resolving a
//! path source is the only disk I/O in the crate; everything downstream of
//! [`ImageSource::into_bytes`] runs in memory.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error reaching an image source before any decoding happens.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source file could not be read.
    #[error("cannot read image source {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the input image bytes come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A file on disk, read fully into memory at resolve time.
    Path(PathBuf),
    /// An in-memory byte buffer, used as-is.
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Resolve the source into raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unreadable`] if a path source cannot be read.
    pub fn into_bytes(self) -> Result<Vec<u8>, SourceError> {
        match self {
            ImageSource::Path(path) => {
                std::fs::read(&path).map_err(|source| SourceError::Unreadable { path, source })
            }
            ImageSource::Bytes(bytes) => Ok(bytes),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}
