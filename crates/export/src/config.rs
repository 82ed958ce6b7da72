use std::path::{Path, PathBuf};

use filters::{SkipSubstrings, SuffixSet};

use crate::DEFAULT_OUTPUT_FILE;

/// Configuration for one export run.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    root: PathBuf,
    output_file: String,
    suffixes: SuffixSet,
    skip: SkipSubstrings,
}

impl ExportConfig {
    /// Creates a configuration for the given root with the default output
    /// name, suffix set, and skip list.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_owned(),
            suffixes: SuffixSet::export_defaults(),
            skip: SkipSubstrings::export_defaults(),
        }
    }

    /// Replaces the output file name.
    ///
    /// The name is resolved against the export root; an absolute path wins
    /// over the root and places the dump elsewhere.
    #[must_use]
    pub fn with_output_file<S: Into<String>>(mut self, output_file: S) -> Self {
        self.output_file = output_file.into();
        self
    }

    /// Replaces the extension allowlist.
    #[must_use]
    pub fn with_suffixes(mut self, suffixes: SuffixSet) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Replaces the directory skip list.
    #[must_use]
    pub fn with_skip(mut self, skip: SkipSubstrings) -> Self {
        self.skip = skip;
        self
    }

    /// Returns the export root as configured.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the output file name.
    #[must_use]
    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    /// Returns the extension allowlist.
    #[must_use]
    pub const fn suffixes(&self) -> &SuffixSet {
        &self.suffixes
    }

    /// Returns the directory skip list.
    #[must_use]
    pub const fn skip(&self) -> &SkipSubstrings {
        &self.skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_usual_project_shape() {
        let config = ExportConfig::new("demo");

        assert_eq!(config.root(), Path::new("demo"));
        assert_eq!(config.output_file(), DEFAULT_OUTPUT_FILE);
        assert!(config.suffixes().contains(".rs"));
        assert!(config.suffixes().contains(".kts"));
        assert!(!config.skip().is_empty());
    }

    #[test]
    fn builders_replace_each_part() {
        let config = ExportConfig::new("demo")
            .with_output_file("dump.txt")
            .with_suffixes(SuffixSet::new([".rs"]))
            .with_skip(SkipSubstrings::new(["vendor"]));

        assert_eq!(config.output_file(), "dump.txt");
        assert!(!config.suffixes().contains(".toml"));
        assert!(config.skip().matches_path(Path::new("vendor/sub")));
    }
}
