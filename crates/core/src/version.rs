//! # Overview
//!
//! Version constants and the `--version` banner shared by the srckit entry
//! points. Centralizing the strings here keeps the CLI crate free of version
//! formatting logic and guarantees every binary reports the same identity.

/// Program name used in banners and message prefixes.
pub const PROGRAM_NAME: &str = "srckit";

/// Workspace version as recorded in the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project homepage printed by the version banner.
pub const HOMEPAGE: &str = "https://github.com/ellan-top/srckit";

/// Renders the full `--version` text.
///
/// The banner is a stable, line-oriented contract: the first line is always
/// `srckit <version>` so callers can parse the version with a single split.
#[must_use]
pub fn version_banner() -> String {
    format!(
        "{PROGRAM_NAME} {VERSION}\nBatch housekeeping tools for source trees: snapshot, migrate, export.\n{HOMEPAGE}\n"
    )
}
