use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error produced when a tree snapshot cannot be taken or saved.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The snapshot root could not be resolved.
    #[error("failed to resolve snapshot root '{}': {source}", path.display())]
    Root {
        /// Root path that failed to resolve.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },

    /// The snapshot root exists but is not a directory.
    #[error("snapshot root '{}' is not a directory", path.display())]
    NotADirectory {
        /// Path that turned out not to be a directory.
        path: PathBuf,
    },

    /// The rendered snapshot could not be written.
    #[error("failed to write tree snapshot to '{}': {source}", path.display())]
    Write {
        /// Output path that could not be written.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl TreeError {
    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Root { path, .. } | Self::NotADirectory { path } | Self::Write { path, .. } => {
                path
            }
        }
    }
}
