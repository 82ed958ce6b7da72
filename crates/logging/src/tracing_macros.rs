//! Convenience macros for srckit-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with appropriate targets for the srckit subsystems.

/// Emit a directory scan trace.
///
/// # Example
/// ```ignore
/// trace_scan!("visiting {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_scan {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "srckit::scan", $($arg)*);
    };
}

/// Emit a tree rendering trace.
///
/// # Example
/// ```ignore
/// trace_tree!("rendered {} entries", count);
/// ```
#[macro_export]
macro_rules! trace_tree {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "srckit::tree", $($arg)*);
    };
}

/// Emit a module move trace.
///
/// # Example
/// ```ignore
/// trace_move!("moving {} -> {}", old.display(), new.display());
/// ```
#[macro_export]
macro_rules! trace_move {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "srckit::move", $($arg)*);
    };
}

/// Emit a reference rewrite trace.
///
/// # Example
/// ```ignore
/// trace_rewrite!("updated {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_rewrite {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "srckit::rewrite", $($arg)*);
    };
}

/// Emit a code export trace.
///
/// # Example
/// ```ignore
/// trace_export!("collected {}", relative.display());
/// ```
#[macro_export]
macro_rules! trace_export {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "srckit::export", $($arg)*);
    };
}
