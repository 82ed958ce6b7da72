use std::path::Path;

use rustc_hash::FxHashSet;

/// Directory basenames hidden from tree snapshots by default.
///
/// These are the cache and build directories that routinely hold thousands of
/// entries nobody wants in a readable overview.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    ".vscode",
    ".idea",
    ".gradle",
    "target",
    "build",
    "bin",
    "out",
];

/// File suffixes hidden from tree snapshots by default, matched without case.
pub const DEFAULT_HIDDEN_SUFFIXES: &[&str] =
    &[".py", ".pyc", ".class", ".jar", ".d", ".timestamp", ".json"];

/// Case-sensitive name endings hidden from tree snapshots by default.
///
/// This overlaps with [`DEFAULT_HIDDEN_SUFFIXES`] for ordinary `.py` files
/// but additionally catches names such as `.py` itself, which carry no
/// extension at all.
pub const DEFAULT_HIDDEN_NAME_ENDINGS: &[&str] = &[".py"];

/// Screening rules applied to every entry during a tree snapshot.
///
/// An entry is hidden when its basename matches a reserved name, when it is a
/// directory whose basename is in the ignored set, or when it is a file whose
/// suffix or name ending matches the hidden sets. Directory matches prune the
/// whole subtree.
#[derive(Clone, Debug, Default)]
pub struct IgnoreRules {
    dir_names: FxHashSet<String>,
    file_suffixes: FxHashSet<String>,
    name_endings: Vec<String>,
    reserved_names: Vec<String>,
}

impl IgnoreRules {
    /// Creates an empty rule set that hides nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the default rule set used by tree snapshots.
    #[must_use]
    pub fn tree_defaults() -> Self {
        Self::empty()
            .with_dir_names(DEFAULT_IGNORED_DIRS.iter().copied())
            .with_file_suffixes(DEFAULT_HIDDEN_SUFFIXES.iter().copied())
            .with_name_endings(DEFAULT_HIDDEN_NAME_ENDINGS.iter().copied())
    }

    /// Adds directory basenames whose subtrees are hidden entirely.
    #[must_use]
    pub fn with_dir_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dir_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds file suffixes hidden from listings, matched without case.
    ///
    /// Entries are stored lowercase with a leading dot; `json` and `.JSON`
    /// both normalise to `.json`.
    #[must_use]
    pub fn with_file_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_suffixes
            .extend(suffixes.into_iter().map(|suffix| normalize_suffix(&suffix.into())));
        self
    }

    /// Adds case-sensitive name endings hidden from listings.
    #[must_use]
    pub fn with_name_endings<I, S>(mut self, endings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_endings.extend(endings.into_iter().map(Into::into));
        self
    }

    /// Reserves a name that must never appear in listings.
    ///
    /// The snapshot tool reserves its own output file so a rerun does not
    /// list the artifact of the previous run.
    #[must_use]
    pub fn with_reserved_name<S: Into<String>>(mut self, name: S) -> Self {
        self.reserved_names.push(name.into());
        self
    }

    /// Returns `true` when a directory with this basename should be hidden.
    #[must_use]
    pub fn ignores_dir_name(&self, name: &str) -> bool {
        self.is_reserved(name) || self.dir_names.contains(name)
    }

    /// Returns `true` when a file with this basename should be hidden.
    #[must_use]
    pub fn ignores_file_name(&self, name: &str) -> bool {
        if self.is_reserved(name) {
            return true;
        }

        if let Some(extension) = Path::new(name).extension() {
            let suffix = format!(".{}", extension.to_string_lossy().to_lowercase());
            if self.file_suffixes.contains(&suffix) {
                return true;
            }
        }

        self.name_endings.iter().any(|ending| name.ends_with(ending))
    }

    /// Returns `true` when the basename matches a reserved name.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.iter().any(|reserved| reserved == name)
    }
}

fn normalize_suffix(suffix: &str) -> String {
    let lowered = suffix.to_lowercase();
    if lowered.starts_with('.') {
        lowered
    } else {
        format!(".{lowered}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_hide_build_directories() {
        let rules = IgnoreRules::tree_defaults();

        assert!(rules.ignores_dir_name(".git"));
        assert!(rules.ignores_dir_name("target"));
        assert!(rules.ignores_dir_name("__pycache__"));
        assert!(!rules.ignores_dir_name("src"));
        assert!(!rules.ignores_dir_name("Target"));
    }

    #[test]
    fn suffix_matching_ignores_case() {
        let rules = IgnoreRules::tree_defaults();

        assert!(rules.ignores_file_name("Config.JSON"));
        assert!(rules.ignores_file_name("Main.class"));
        assert!(rules.ignores_file_name("script.PY"));
        assert!(!rules.ignores_file_name("lib.rs"));
        assert!(!rules.ignores_file_name("data.json5"));
    }

    #[test]
    fn name_endings_match_exact_case() {
        let rules = IgnoreRules::empty().with_name_endings([".py"]);

        assert!(rules.ignores_file_name("gen.py"));
        assert!(rules.ignores_file_name(".py"));
        assert!(!rules.ignores_file_name("gen.PY"));
    }

    #[test]
    fn dotted_names_without_extension_are_kept() {
        let rules = IgnoreRules::tree_defaults();

        assert!(!rules.ignores_file_name(".gitignore"));
        assert!(!rules.ignores_file_name("Makefile"));
    }

    #[test]
    fn reserved_name_hides_both_files_and_directories() {
        let rules = IgnoreRules::tree_defaults().with_reserved_name("project_tree.txt");

        assert!(rules.ignores_file_name("project_tree.txt"));
        assert!(rules.ignores_dir_name("project_tree.txt"));
        assert!(!rules.ignores_file_name("project_notes.txt"));
    }

    #[test]
    fn bare_suffixes_are_normalised() {
        let rules = IgnoreRules::empty().with_file_suffixes(["rs", ".TOML"]);

        assert!(rules.ignores_file_name("lib.rs"));
        assert!(rules.ignores_file_name("Cargo.toml"));
        assert!(!rules.ignores_file_name("notes.txt"));
    }

    #[test]
    fn empty_rules_hide_nothing() {
        let rules = IgnoreRules::empty();

        assert!(!rules.ignores_dir_name(".git"));
        assert!(!rules.ignores_file_name("script.py"));
    }
}
