#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `core` collects the pieces every srckit tool needs but none owns: the
//! [`message::Message`] type that renders operator-facing diagnostics with a
//! consistent `srckit <severity>:` prefix, the [`exit_code::ExitCode`] enum
//! that fixes the process exit contract, and the version banner shared by the
//! CLI entry points.
//!
//! # Design
//!
//! The crate deliberately has no dependencies so that every tool crate and the
//! CLI can pull it in without widening their build graphs. Diagnostics are
//! plain values: producing a [`message::Message`] never performs I/O, and the
//! caller decides where and whether to write it.
//!
//! # Invariants
//!
//! - Every rendered message starts with `srckit info:`, `srckit warning:`, or
//!   `srckit error:` so output remains grep-friendly.
//! - Exit codes are stable: `0` for success (including runs that skipped
//!   individual files), `1` for usage errors, `2` for configuration errors.

/// Process exit code definitions shared by all entry points.
pub mod exit_code;
/// Message formatting utilities shared across workspace binaries.
pub mod message;
/// Version constants and banner helpers used by CLI entry points.
pub mod version;

pub use exit_code::ExitCode;
pub use message::{Message, Severity};
