//! Errors surfaced by the content scanner and catalog

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from scanning the content directory or loading a single post.
///
/// `NotFound` and `InvalidSlug` are distinct so the rendering layer can map
/// them to different responses (404 vs. 400).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Directory or file missing/unreadable at the OS level
    #[error("filesystem error at {path:?}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No `<slug>.md` file exists in the content directory
    #[error("no post found for slug '{0}'")]
    NotFound(String),

    /// Slug contains path separators or parent-directory references
    #[error("invalid slug '{0}'")]
    InvalidSlug(String),

    /// File content is not valid UTF-8
    #[error("post {path:?} is not valid UTF-8 text")]
    Decode { path: PathBuf },
}

impl CatalogError {
    /// Classify an I/O error for a given path.
    ///
    /// `read_to_string` reports non-UTF-8 content as `InvalidData`; everything
    /// else is an ordinary filesystem failure.
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            CatalogError::Decode { path }
        } else {
            CatalogError::FileSystem { path, source }
        }
    }
}
