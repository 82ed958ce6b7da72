use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::config::Mapping;
use crate::error::MigrateError;

/// One literal text replacement derived from a mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    find: String,
    replace: String,
}

impl Substitution {
    /// Returns the literal text to search for.
    #[must_use]
    pub fn find(&self) -> &str {
        &self.find
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn replace(&self) -> &str {
        &self.replace
    }
}

/// One directory relocation derived from a mapping.
#[derive(Clone, Debug)]
pub struct PlannedMove {
    from_rel: String,
    to_rel: String,
    from_dir: PathBuf,
    to_dir: PathBuf,
}

impl PlannedMove {
    /// Returns the source path relative to the migration root.
    #[must_use]
    pub fn from_rel(&self) -> &str {
        &self.from_rel
    }

    /// Returns the destination path relative to the migration root.
    #[must_use]
    pub fn to_rel(&self) -> &str {
        &self.to_rel
    }

    /// Returns the absolute source directory.
    #[must_use]
    pub fn from_dir(&self) -> &Path {
        &self.from_dir
    }

    /// Returns the absolute destination directory.
    #[must_use]
    pub fn to_dir(&self) -> &Path {
        &self.to_dir
    }
}

/// A fully derived migration: relocations in configuration order and
/// substitutions ordered longest search string first.
#[derive(Clone, Debug)]
pub struct MigrationPlan {
    moves: Vec<PlannedMove>,
    substitutions: Vec<Substitution>,
}

impl MigrationPlan {
    /// Derives the plan for the given root and base package.
    ///
    /// Each mapping contributes one relocation and two substitutions: the
    /// dotted package form and the slash path form of the old and new paths,
    /// both prefixed with the base package.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::NoMappings`] for an empty mapping list and
    /// [`MigrateError::DuplicateSource`] when two mappings share a source.
    pub fn derive(
        root: &Path,
        base_package: &str,
        mappings: &[Mapping],
    ) -> Result<Self, MigrateError> {
        if mappings.is_empty() {
            return Err(MigrateError::NoMappings);
        }

        let mut seen = FxHashSet::default();
        for mapping in mappings {
            if !seen.insert(mapping.from()) {
                return Err(MigrateError::DuplicateSource {
                    path: mapping.from().to_owned(),
                });
            }
        }

        let base_slash = base_package.replace('.', "/");
        let mut moves = Vec::with_capacity(mappings.len());
        let mut substitutions = Vec::with_capacity(mappings.len() * 2);

        for mapping in mappings {
            substitutions.push(Substitution {
                find: format!("{base_package}.{}", mapping.from().replace('/', ".")),
                replace: format!("{base_package}.{}", mapping.to().replace('/', ".")),
            });
            substitutions.push(Substitution {
                find: format!("{base_slash}/{}", mapping.from()),
                replace: format!("{base_slash}/{}", mapping.to()),
            });

            moves.push(PlannedMove {
                from_rel: mapping.from().to_owned(),
                to_rel: mapping.to().to_owned(),
                from_dir: root.join(mapping.from()),
                to_dir: root.join(mapping.to()),
            });
        }

        // Longest search string first, so a mapping whose source is a path
        // prefix of another cannot corrupt the longer match.
        substitutions.sort_by_key(|substitution| Reverse(substitution.find.len()));

        Ok(Self {
            moves,
            substitutions,
        })
    }

    /// Returns the relocations in configuration order.
    #[must_use]
    pub fn moves(&self) -> &[PlannedMove] {
        &self.moves
    }

    /// Returns the substitutions, longest search string first.
    #[must_use]
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Applies every substitution to the given text in order.
    #[must_use]
    pub fn rewrite(&self, text: &str) -> String {
        let mut current = text.to_owned();
        for substitution in &self.substitutions {
            if current.contains(&substitution.find) {
                current = current.replace(&substitution.find, &substitution.replace);
            }
        }
        current
    }
}
