use std::path::{Path, PathBuf};

/// One relocated mapping and the number of files that moved with it.
#[derive(Clone, Debug)]
pub struct MigratedModule {
    from: String,
    to: String,
    moved_files: usize,
}

impl MigratedModule {
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

    /// Returns how many files were moved for this mapping.
    #[must_use]
    pub const fn moved_files(&self) -> usize {
        self.moved_files
    }
}

/// Everything a migration run did, or in a dry run would have done.
#[derive(Clone, Debug, Default)]
pub struct MigrationReport {
    dry_run: bool,
    migrated: Vec<MigratedModule>,
    skipped_sources: Vec<String>,
    leftovers: Vec<PathBuf>,
    pruned_dirs: usize,
    rewritten: Vec<PathBuf>,
    failures: Vec<String>,
    descriptor_reminder: Option<PathBuf>,
}

impl MigrationReport {
    pub(crate) fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub(crate) fn record_module(&mut self, from: &str, to: &str, moved_files: usize) {
        self.migrated.push(MigratedModule {
            from: from.to_owned(),
            to: to.to_owned(),
            moved_files,
        });
    }

    pub(crate) fn record_skipped(&mut self, from: &str) {
        self.skipped_sources.push(from.to_owned());
    }

    pub(crate) fn record_leftover(&mut self, path: PathBuf) {
        self.leftovers.push(path);
    }

    pub(crate) fn add_pruned(&mut self, count: usize) {
        self.pruned_dirs += count;
    }

    pub(crate) fn record_rewritten(&mut self, path: PathBuf) {
        self.rewritten.push(path);
    }

    pub(crate) fn record_failure(&mut self, failure: String) {
        self.failures.push(failure);
    }

    pub(crate) fn set_descriptor_reminder(&mut self, path: PathBuf) {
        self.descriptor_reminder = Some(path);
    }

    /// Returns `true` when the run left the filesystem untouched.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the mappings that were relocated, in configuration order.
    #[must_use]
    pub fn migrated(&self) -> &[MigratedModule] {
        &self.migrated
    }

    /// Returns the mappings skipped because their source directory is absent.
    #[must_use]
    pub fn skipped_sources(&self) -> &[String] {
        &self.skipped_sources
    }

    /// Returns the non-file children left behind in source directories.
    #[must_use]
    pub fn leftovers(&self) -> &[PathBuf] {
        &self.leftovers
    }

    /// Returns how many emptied directories were removed.
    #[must_use]
    pub const fn pruned_dirs(&self) -> usize {
        self.pruned_dirs
    }

    /// Returns the files whose references were rewritten.
    #[must_use]
    pub fn rewritten(&self) -> &[PathBuf] {
        &self.rewritten
    }

    /// Returns the per-file failures absorbed during the run.
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Returns the descriptor that deserves a manual check, when present.
    #[must_use]
    pub fn descriptor_reminder(&self) -> Option<&Path> {
        self.descriptor_reminder.as_deref()
    }

    /// Returns the total number of files moved across all mappings.
    #[must_use]
    pub fn total_moved_files(&self) -> usize {
        self.migrated.iter().map(MigratedModule::moved_files).sum()
    }
}
