use std::path::{Path, PathBuf};

use filters::SuffixSet;

use crate::DEFAULT_BASE_PACKAGE;
use crate::error::MigrateError;

/// One relocation rule: a source path and a destination path, both relative
/// to the migration root and using `/` separators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping {
    from: String,
    to: String,
}

impl Mapping {
    /// Creates a mapping after validating both sides.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::MappingPath`] when a side is empty, absolute,
    /// or uses `.` or `..` components.
    pub fn new<F, T>(from: F, to: T) -> Result<Self, MigrateError>
    where
        F: Into<String>,
        T: Into<String>,
    {
        Ok(Self {
            from: validate_side(from.into())?,
            to: validate_side(to.into())?,
        })
    }

    /// Parses the `OLD=NEW` command-line form.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::MappingSyntax`] when the separator is missing
    /// and [`MigrateError::MappingPath`] when a side fails validation.
    pub fn parse(spec: &str) -> Result<Self, MigrateError> {
        let Some((from, to)) = spec.split_once('=') else {
            return Err(MigrateError::MappingSyntax {
                spec: spec.to_owned(),
            });
        };
        Self::new(from, to)
    }

    /// Returns the source path relative to the migration root.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the destination path relative to the migration root.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }
}

fn validate_side(side: String) -> Result<String, MigrateError> {
    if side.starts_with('/') {
        return Err(MigrateError::MappingPath {
            path: side,
            reason: "must be relative to the migration root",
        });
    }

    let trimmed = side.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(MigrateError::MappingPath {
            path: side,
            reason: "is empty",
        });
    }

    for component in trimmed.split('/') {
        if component.is_empty() {
            return Err(MigrateError::MappingPath {
                path: side,
                reason: "contains an empty component",
            });
        }
        if component == "." || component == ".." {
            return Err(MigrateError::MappingPath {
                path: side,
                reason: "must not contain '.' or '..' components",
            });
        }
    }

    Ok(trimmed.to_owned())
}

/// Configuration for one migration run.
#[derive(Clone, Debug)]
pub struct MigrationConfig {
    root: PathBuf,
    base_package: String,
    mappings: Vec<Mapping>,
    suffixes: SuffixSet,
    descriptor: Option<PathBuf>,
    dry_run: bool,
}

impl MigrationConfig {
    /// Creates a configuration for the given migration root.
    ///
    /// Defaults: base package [`DEFAULT_BASE_PACKAGE`], rewrite suffixes from
    /// [`SuffixSet::rewrite_defaults`], no descriptor check, live run.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            base_package: DEFAULT_BASE_PACKAGE.to_owned(),
            mappings: Vec::new(),
            suffixes: SuffixSet::rewrite_defaults(),
            descriptor: None,
            dry_run: false,
        }
    }

    /// Replaces the base package prefixed to every mapping side.
    #[must_use]
    pub fn with_base_package<S: Into<String>>(mut self, base_package: S) -> Self {
        self.base_package = base_package.into();
        self
    }

    /// Appends one relocation mapping.
    #[must_use]
    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mappings.push(mapping);
        self
    }

    /// Appends several relocation mappings.
    #[must_use]
    pub fn with_mappings<I: IntoIterator<Item = Mapping>>(mut self, mappings: I) -> Self {
        self.mappings.extend(mappings);
        self
    }

    /// Replaces the suffixes whose files get their references rewritten.
    #[must_use]
    pub fn with_suffixes(mut self, suffixes: SuffixSet) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Sets the plugin descriptor whose presence triggers a manual reminder.
    #[must_use]
    pub fn with_descriptor<P: Into<PathBuf>>(mut self, descriptor: P) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }

    /// Switches between a dry run and a live run.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the migration root as configured.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the base package.
    #[must_use]
    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    /// Returns the relocation mappings in configuration order.
    #[must_use]
    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// Returns the rewrite suffix set.
    #[must_use]
    pub const fn suffixes(&self) -> &SuffixSet {
        &self.suffixes
    }

    /// Returns the descriptor path, when one is configured.
    #[must_use]
    pub fn descriptor(&self) -> Option<&Path> {
        self.descriptor.as_deref()
    }

    /// Returns `true` when the run should leave the filesystem untouched.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}
