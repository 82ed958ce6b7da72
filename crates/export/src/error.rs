use std::io;
use std::path::PathBuf;

use thiserror::Error;

use walk::WalkError;

/// Errors that abort an export run.
///
/// Failures on individual source files are not in this list; they are
/// absorbed into the report so one unreadable file cannot sink the dump.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export root could not be resolved.
    #[error("failed to resolve export root '{}': {source}", path.display())]
    Root {
        /// Root path as configured.
        path: PathBuf,
        /// Underlying lookup failure.
        source: io::Error,
    },

    /// The export root exists but is not a directory.
    #[error("export root '{}' is not a directory", path.display())]
    NotADirectory {
        /// Resolved root path.
        path: PathBuf,
    },

    /// The traversal could not be started.
    #[error("failed to scan export root: {source}")]
    Scan {
        /// Underlying walker failure.
        source: WalkError,
    },

    /// The output file could not be written.
    #[error("failed to write export '{}': {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying write failure.
        source: io::Error,
    },
}
