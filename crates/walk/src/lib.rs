#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal used by the srckit
//! tools when scanning source trees. The walker enumerates regular files,
//! directories, and symbolic links in depth-first order, sorting directory
//! entries lexicographically before yielding them so the sequence is stable
//! regardless of the underlying filesystem's iteration order.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options: whether the root entry is
//!   emitted, how deep the walk may descend, and whether directory symlinks
//!   are followed.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values.
//!   Directory contents are processed before the walker moves to the next
//!   sibling.
//! - Traversal is tolerant by construction: a directory that cannot be read
//!   is treated as empty and an entry whose metadata cannot be queried is
//!   skipped, with the incident reported through the `srckit::scan` tracing
//!   target. Batch housekeeping keeps going past the corners of a tree it
//!   cannot see into.
//!
//! # Invariants
//!
//! - Returned [`WalkEntry`] values always reference paths inside the
//!   configured root. Relative paths never contain `..` segments.
//! - Directory entries are yielded exactly once. When symlink following is
//!   enabled, canonical paths are tracked to avoid cycles even if a symlink
//!   points back to an ancestor directory.
//! - Iteration never fails once a [`Walker`] exists; the only fallible step
//!   is [`WalkBuilder::build`], which reports a [`WalkError`] when the root
//!   itself cannot be inspected.
//!
//! # Errors
//!
//! [`WalkBuilder::build`] emits [`WalkError`] when the traversal root cannot
//! be resolved or inspected. Callers can reach the original failure through
//! [`WalkError::source`](std::error::Error::source).
//!
//! # Examples
//!
//! Traverse a directory tree and collect the relative paths discovered by the
//! walker:
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! fs::create_dir_all(root.join("nested"))?;
//! fs::write(root.join("file.txt"), b"data")?;
//!
//! let walker = WalkBuilder::new(&root).include_root(false).build()?;
//! let paths: Vec<_> = walker
//!     .map(|entry| entry.relative_path().to_path_buf())
//!     .collect();
//! assert_eq!(paths.len(), 2);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;

#[cfg(test)]
mod tests;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use walker::Walker;
