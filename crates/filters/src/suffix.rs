use std::path::Path;

use rustc_hash::FxHashSet;

/// Suffixes collected by the code export tool by default.
pub const DEFAULT_EXPORT_SUFFIXES: &[&str] = &[".rs", ".java", ".toml", ".kts"];

/// Suffixes rewritten by the migration tool by default.
pub const DEFAULT_REWRITE_SUFFIXES: &[&str] = &[".java"];

/// Extension allowlist with optional case folding.
///
/// Matching compares the path's final extension, dot included. By default the
/// comparison is byte for byte, so `Main.java` matches `.java` while
/// `MAIN.JAVA` does not. Sets built with [`SuffixSet::fold_case`] lower-case
/// the extension before comparing instead, which is how the export tool
/// recognises `Build.TOML` alongside `Cargo.toml`.
#[derive(Clone, Debug, Default)]
pub struct SuffixSet {
    suffixes: FxHashSet<String>,
    fold_case: bool,
}

impl SuffixSet {
    /// Creates a set from the given suffixes, normalising a missing leading dot.
    #[must_use]
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(|suffix| normalize_suffix(&suffix.into()))
                .collect(),
            fold_case: false,
        }
    }

    /// Switches the set to case-insensitive matching.
    ///
    /// Stored suffixes are lower-cased so later lookups only fold the probe.
    #[must_use]
    pub fn fold_case(mut self) -> Self {
        self.suffixes = self
            .suffixes
            .into_iter()
            .map(|suffix| suffix.to_lowercase())
            .collect();
        self.fold_case = true;
        self
    }

    /// Creates the default allowlist used by the code export tool.
    #[must_use]
    pub fn export_defaults() -> Self {
        Self::new(DEFAULT_EXPORT_SUFFIXES.iter().copied()).fold_case()
    }

    /// Creates the default allowlist used by the migration rewrite pass.
    #[must_use]
    pub fn rewrite_defaults() -> Self {
        Self::new(DEFAULT_REWRITE_SUFFIXES.iter().copied())
    }

    /// Returns `true` when the path's extension is in the set.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension().is_some_and(|extension| {
            let suffix = format!(".{}", extension.to_string_lossy());
            self.lookup(&suffix)
        })
    }

    /// Returns `true` when the normalised suffix is in the set.
    #[must_use]
    pub fn contains(&self, suffix: &str) -> bool {
        self.lookup(&normalize_suffix(suffix))
    }

    /// Returns the number of suffixes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Returns `true` when the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    fn lookup(&self, suffix: &str) -> bool {
        if self.fold_case {
            self.suffixes.contains(&suffix.to_lowercase())
        } else {
            self.suffixes.contains(suffix)
        }
    }
}

fn normalize_suffix(suffix: &str) -> String {
    if suffix.starts_with('.') {
        suffix.to_owned()
    } else {
        format!(".{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_defaults_match_expected_sources() {
        let set = SuffixSet::export_defaults();

        assert!(set.matches(Path::new("src/lib.rs")));
        assert!(set.matches(Path::new("Main.java")));
        assert!(set.matches(Path::new("Cargo.toml")));
        assert!(set.matches(Path::new("build.gradle.kts")));
        assert!(!set.matches(Path::new("notes.md")));
    }

    #[test]
    fn export_matching_folds_case() {
        let set = SuffixSet::export_defaults();

        assert!(set.matches(Path::new("MAIN.JAVA")));
        assert!(set.matches(Path::new("Build.Toml")));
    }

    #[test]
    fn rewrite_matching_is_case_sensitive() {
        let set = SuffixSet::rewrite_defaults();

        assert!(set.matches(Path::new("Main.java")));
        assert!(!set.matches(Path::new("MAIN.JAVA")));
    }

    #[test]
    fn fold_case_lowers_stored_suffixes() {
        let set = SuffixSet::new([".RS"]).fold_case();

        assert!(set.matches(Path::new("lib.rs")));
        assert!(set.contains(".rs"));
    }

    #[test]
    fn files_without_extension_never_match() {
        let set = SuffixSet::export_defaults();

        assert!(!set.matches(Path::new("Makefile")));
        assert!(!set.matches(Path::new(".gitignore")));
    }

    #[test]
    fn bare_suffixes_gain_a_leading_dot() {
        let set = SuffixSet::new(["rs", ".java"]);

        assert!(set.contains("rs"));
        assert!(set.contains(".rs"));
        assert!(set.matches(Path::new("lib.rs")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_set_matches_nothing() {
        let set = SuffixSet::default();

        assert!(set.is_empty());
        assert!(!set.matches(Path::new("lib.rs")));
    }
}
