#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Concatenates a project's sources into one comment-stripped text file.
//!
//! # Overview
//!
//! The exporter walks a root directory in deterministic order, picks files
//! by extension, removes comments, trims every line, drops blank lines, and
//! appends each file to a single output under a `FILE:` banner. The result
//! is a compact dump of a project suitable for pasting into a review or a
//! chat window.
//!
//! # Design
//!
//! Comment stripping is regular-expression based and deliberately heuristic:
//! it does not parse string literals, so comment-like text inside a string is
//! stripped too. That approximation is accepted; the output is for reading,
//! not for compiling.
//!
//! Per-file read failures are recorded in the [`ExportReport`] and do not
//! stop the run. Only an unusable root or a failure to write the output file
//! itself is fatal.
//!
//! # Examples
//!
//! ```no_run
//! use export::{ExportConfig, Exporter};
//!
//! # fn main() -> Result<(), export::ExportError> {
//! let report = Exporter::new(ExportConfig::new(".")).run()?;
//! println!("exported {} files", report.exported().len());
//! # Ok(())
//! # }
//! ```

/// File name the export is written to when not overridden.
pub const DEFAULT_OUTPUT_FILE: &str = "exported_code.txt";

mod config;
mod error;
mod exporter;
mod strip;

pub use config::ExportConfig;
pub use error::ExportError;
pub use exporter::{ExportReport, Exporter};
pub use strip::{CommentStyle, clean_source};
