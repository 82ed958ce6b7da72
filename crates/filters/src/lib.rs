#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` provides the screening rules shared by the srckit tools. The
//! tools never interpret glob patterns; everything they skip is described by
//! exact directory names, file suffixes, or raw substrings, so the types here
//! stay deliberately literal.
//!
//! # Design
//!
//! - [`IgnoreRules`] captures the tree snapshot's pruning model: directory
//!   basenames that hide whole subtrees, file suffixes matched without case,
//!   case-sensitive name endings, and reserved names the tool must never list
//!   (its own output file).
//! - [`SuffixSet`] is the extension allowlist used to select source files
//!   for reference rewriting (exact case) and code export (folded case).
//! - [`SkipSubstrings`] reproduces the export tool's crude path screening: a
//!   path is skipped when any needle occurs anywhere in its textual form.
//!
//! # Invariants
//!
//! - Rule evaluation never touches the filesystem; callers pass in names and
//!   paths they have already enumerated.
//! - Suffixes are stored with their leading dot. Constructors normalise bare
//!   entries such as `rs` into `.rs` so call sites can stay terse.

mod ignore;
mod skip;
mod suffix;

pub use ignore::IgnoreRules;
pub use skip::SkipSubstrings;
pub use suffix::SuffixSet;
