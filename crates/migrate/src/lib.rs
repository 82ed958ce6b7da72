#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Mapping-driven relocation of package directories with reference rewriting.
//!
//! # Overview
//!
//! A migration takes a root directory that corresponds to a base package and
//! a list of `old=new` path mappings relative to that root. It runs in three
//! passes. First the direct file children of every mapped source directory
//! are moved into the mapped destination, and source directories that end up
//! empty are pruned, stopping below the root. Then every source file under
//! the directory *above* the root is scanned and literal occurrences of the
//! old package strings, in both dotted and slash-separated form, are replaced
//! by the new ones. Finally, when a plugin descriptor is configured and
//! present, the report carries a reminder to check it by hand, since the
//! correct main-class value cannot be derived from the mappings.
//!
//! # Design
//!
//! The migrator is a pure engine: it returns a [`MigrationReport`] describing
//! what happened and leaves presentation to the caller. Only configuration
//! problems fail the run. A mapping whose source directory is absent is
//! skipped, a file that cannot be read or written is recorded in the report,
//! and a directory that cannot be pruned is left alone.
//!
//! # Invariants
//!
//! - Substitutions apply longest search string first, so a mapping whose
//!   source is a path prefix of another cannot corrupt the longer match.
//! - Relocation touches only the direct file children of a source directory;
//!   nested subdirectories stay behind and are reported.
//! - Rewrites are literal substring replacements and files are written back
//!   only when the content actually changed.
//!
//! # Examples
//!
//! ```no_run
//! use migrate::{Mapping, MigrationConfig, Migrator};
//!
//! # fn main() -> Result<(), migrate::MigrateError> {
//! let config = MigrationConfig::new("src/main/java/top/ellan/ecobridge")
//!     .with_mapping(Mapping::parse("core/engine=domain/algorithm")?);
//! let report = Migrator::new(config).run()?;
//! println!("moved {} files", report.total_moved_files());
//! # Ok(())
//! # }
//! ```

/// Namespace prefixed to every mapping side when deriving substitutions.
pub const DEFAULT_BASE_PACKAGE: &str = "top.ellan.ecobridge";

mod config;
mod error;
mod plan;
mod report;
mod runner;

pub use config::{Mapping, MigrationConfig};
pub use error::MigrateError;
pub use plan::{MigrationPlan, PlannedMove, Substitution};
pub use report::{MigratedModule, MigrationReport};
pub use runner::Migrator;
