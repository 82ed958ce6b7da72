use std::path::{Path, PathBuf};

use filters::IgnoreRules;

use crate::{DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_FILE};

/// Configures a tree snapshot rooted at a specific directory.
#[derive(Clone, Debug)]
pub struct TreeConfig {
    root: PathBuf,
    output_file: String,
    max_depth: usize,
    rules: IgnoreRules,
}

impl TreeConfig {
    /// Creates a configuration with the default output name, depth bound,
    /// and screening rules.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
            rules: IgnoreRules::tree_defaults(),
        }
    }

    /// Overrides the name of the snapshot file written into the root.
    #[must_use]
    pub fn with_output_file<S: Into<String>>(mut self, name: S) -> Self {
        self.output_file = name.into();
        self
    }

    /// Overrides the depth bound.
    ///
    /// Direct children of the root sit at depth `1`.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Replaces the screening rules applied to every entry.
    #[must_use]
    pub fn with_rules(mut self, rules: IgnoreRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the configured root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the snapshot file name.
    #[must_use]
    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    /// Returns the depth bound.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the screening rules.
    #[must_use]
    pub const fn rules(&self) -> &IgnoreRules {
        &self.rules
    }
}
