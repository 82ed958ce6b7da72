use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a migration before it touches the filesystem.
///
/// Everything past configuration is tolerated: mappings whose source
/// directory is absent are skipped and per-file failures are collected in
/// the report instead of aborting the run.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// The migration root could not be resolved.
    #[error("failed to resolve migration root '{}': {source}", path.display())]
    Root {
        /// Root path as configured.
        path: PathBuf,
        /// Underlying lookup failure.
        source: io::Error,
    },

    /// The migration root exists but is not a directory.
    #[error("migration root '{}' is not a directory", path.display())]
    NotADirectory {
        /// Resolved root path.
        path: PathBuf,
    },

    /// A mapping argument was not of the `OLD=NEW` form.
    #[error("mapping '{spec}' is not of the form OLD=NEW")]
    MappingSyntax {
        /// Offending argument as given.
        spec: String,
    },

    /// A mapping side failed validation.
    #[error("mapping path '{path}' {reason}")]
    MappingPath {
        /// Offending mapping side.
        path: String,
        /// What the validation rejected.
        reason: &'static str,
    },

    /// The same source path appears in more than one mapping.
    #[error("mapping source '{path}' appears more than once")]
    DuplicateSource {
        /// Repeated source path.
        path: String,
    },

    /// The mapping list is empty.
    #[error("no package mappings were supplied")]
    NoMappings,
}
