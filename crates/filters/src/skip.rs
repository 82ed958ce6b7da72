use std::path::Path;

/// Substrings that exclude a path from code export by default.
///
/// `yml` keeps workflow and plugin descriptors out of exports; `gradle`
/// covers both the wrapper directory and generated build scripts.
pub const DEFAULT_SKIP_SUBSTRINGS: &[&str] = &["target", "build", ".git", "gradle", "yml"];

/// Raw substring screen applied to whole paths.
///
/// A path is skipped when any needle occurs anywhere in its textual form,
/// separators included. The matching is deliberately crude: `build` also
/// hits a segment named `prebuild`, and that is accepted behaviour for a
/// bulk export meant to err on the side of omitting noise.
#[derive(Clone, Debug, Default)]
pub struct SkipSubstrings {
    needles: Vec<String>,
}

impl SkipSubstrings {
    /// Creates a screen from the given needles.
    #[must_use]
    pub fn new<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            needles: needles.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the default screen used by the code export tool.
    #[must_use]
    pub fn export_defaults() -> Self {
        Self::new(DEFAULT_SKIP_SUBSTRINGS.iter().copied())
    }

    /// Returns `true` when any needle occurs in the path's textual form.
    ///
    /// Callers pass paths relative to the scan root so ambient parent
    /// directories cannot trigger matches.
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.needles.iter().any(|needle| text.contains(needle))
    }

    /// Returns `true` when the screen has no needles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_skips_build_trees() {
        let screen = SkipSubstrings::export_defaults();

        assert!(screen.matches_path(Path::new("target/debug/lib.rs")));
        assert!(screen.matches_path(Path::new("app/build/generated/Foo.java")));
        assert!(screen.matches_path(Path::new(".github/workflows/ci.yml")));
        assert!(screen.matches_path(Path::new("gradle/wrapper/gradle-wrapper.properties")));
        assert!(!screen.matches_path(Path::new("src/main/java/App.java")));
    }

    #[test]
    fn matching_is_substring_based() {
        let screen = SkipSubstrings::export_defaults();

        // Needles hit anywhere in the path, including inside file names.
        assert!(screen.matches_path(Path::new("src/rebuild.rs")));
        assert!(screen.matches_path(Path::new("docs/gradle-notes.md")));
    }

    #[test]
    fn empty_screen_skips_nothing() {
        let screen = SkipSubstrings::default();

        assert!(screen.is_empty());
        assert!(!screen.matches_path(Path::new("target/debug/lib.rs")));
    }
}
