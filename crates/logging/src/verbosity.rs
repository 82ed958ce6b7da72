//! Verbosity configuration bridging the `-v` flag count to tracing filters.
//!
//! The mapping is stable so operators can rely on it in scripts: no `-v`
//! keeps the tools quiet apart from warnings, one `-v` surfaces per-action
//! info events, two enable per-file debug events, and three or more turn on
//! full trace output. Setting `RUST_LOG` overrides the mapping entirely.

use std::io;

use tracing_subscriber::EnvFilter;

/// Returns the filter directives corresponding to a `-v` flag count.
#[must_use]
pub const fn verbosity_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "srckit=warn",
        1 => "srckit=info",
        2 => "srckit=debug",
        _ => "srckit=trace",
    }
}

/// Installs the global tracing subscriber for a srckit run.
///
/// Diagnostics go to stderr without ANSI colour so they interleave cleanly
/// with operator messages. A subscriber installed earlier in the process is
/// left in place, which keeps repeated in-process invocations (as exercised
/// by tests) harmless.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_scale_with_verbose_count() {
        assert_eq!(verbosity_directives(0), "srckit=warn");
        assert_eq!(verbosity_directives(1), "srckit=info");
        assert_eq!(verbosity_directives(2), "srckit=debug");
        assert_eq!(verbosity_directives(3), "srckit=trace");
        assert_eq!(verbosity_directives(200), "srckit=trace");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(0);
        init_tracing(2);
    }
}
