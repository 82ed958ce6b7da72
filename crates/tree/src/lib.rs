#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `tree` renders a filtered directory listing as connector-drawn text and
//! saves it inside the inspected project, giving reviewers a one-file
//! overview of a source tree without the cache and build noise. The output
//! format is fixed: a `📦 name/` header line followed by one line per entry,
//! drawn with `├── `/`└── ` connectors and `│   ` continuation rails.
//!
//! # Design
//!
//! - [`TreeConfig`] carries the snapshot parameters: the root to inspect, the
//!   output file name, the depth bound, and the [`filters::IgnoreRules`]
//!   screening entries out of the listing.
//! - [`TreeRenderer`] performs the recursive rendering. Each directory's
//!   children are sorted directories-first and case-insensitively, matching
//!   how people read project layouts. The renderer silently treats
//!   directories it cannot read as empty so one locked-down folder never
//!   sinks a snapshot.
//! - The output file is reserved by name at every level, so a rerun never
//!   lists the artifact of the previous run.
//!
//! # Invariants
//!
//! - Rendering is deterministic: an unchanged tree produces byte-identical
//!   snapshots.
//! - Direct children of the root sit at depth `1`; an entry appears in the
//!   listing only while its depth does not exceed the configured bound.
//! - The snapshot is written in UTF-8 beneath the inspected root itself,
//!   truncating any previous snapshot file.
//!
//! # Errors
//!
//! [`TreeError`] reports the two load-bearing failures: a root that cannot
//! be resolved to a directory and an output file that cannot be written.
//! Everything else degrades gracefully into an emptier listing.

mod config;
mod error;
mod renderer;

pub use config::TreeConfig;
pub use error::TreeError;
pub use renderer::{TreeRenderer, TreeReport, TreeSnapshot};

/// Default name of the snapshot file written into the inspected root.
pub const DEFAULT_OUTPUT_FILE: &str = "project_tree.txt";

/// Default bound on how deep the snapshot descends below the root.
pub const DEFAULT_MAX_DEPTH: usize = 15;
