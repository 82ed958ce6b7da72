use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when a traversal cannot start.
///
/// Failures encountered after construction are tolerated rather than
/// reported: unreadable directories walk as empty and entries without
/// readable metadata are skipped. Only the root itself is load-bearing.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::RootMetadata { path, source },
        }
    }

    pub(crate) fn working_directory(source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::WorkingDirectory { source },
        }
    }

    /// Returns the specific failure that prevented traversal.
    #[must_use]
    pub const fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// Callers can forward the returned path directly into higher-level
    /// error messages without having to pattern match on [`WalkErrorKind`].
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::RootMetadata { path, source } => {
                write!(
                    f,
                    "failed to inspect traversal root '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::WorkingDirectory { source } => {
                write!(f, "failed to resolve the current directory: {source}")
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::RootMetadata { source, .. }
            | WalkErrorKind::WorkingDirectory { source } => Some(source),
        }
    }
}

/// Classification of traversal start-up failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// Failed to query metadata for the traversal root.
    RootMetadata {
        /// Path that failed to provide metadata.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to resolve the current directory while absolutizing the root.
    WorkingDirectory {
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootMetadata { path, .. } => path,
            Self::WorkingDirectory { .. } => Path::new("."),
        }
    }
}
