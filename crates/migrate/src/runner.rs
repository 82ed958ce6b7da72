use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use logging::{trace_move, trace_rewrite};
use walk::WalkBuilder;

use crate::config::MigrationConfig;
use crate::error::MigrateError;
use crate::plan::{MigrationPlan, PlannedMove};
use crate::report::MigrationReport;

/// Executes the migration described by a [`MigrationConfig`].
#[derive(Clone, Debug)]
pub struct Migrator {
    config: MigrationConfig,
}

impl Migrator {
    /// Creates a migrator for the given configuration.
    #[must_use]
    pub const fn new(config: MigrationConfig) -> Self {
        Self { config }
    }

    /// Runs the migration and reports what happened.
    ///
    /// In a dry run the filesystem is left untouched and the report describes
    /// the changes a live run would make.
    ///
    /// # Errors
    ///
    /// Fails only on configuration problems: an unusable root or an invalid
    /// mapping set. Everything later is absorbed into the report.
    pub fn run(&self) -> Result<MigrationReport, MigrateError> {
        let root = resolve_root(self.config.root())?;
        let plan =
            MigrationPlan::derive(&root, self.config.base_package(), self.config.mappings())?;

        let mut report = MigrationReport::new(self.config.dry_run());

        for planned in plan.moves() {
            self.relocate(planned, &root, &mut report);
        }
        self.rewrite_references(&plan, &root, &mut report);
        self.check_descriptor(&mut report);

        Ok(report)
    }

    fn relocate(&self, planned: &PlannedMove, root: &Path, report: &mut MigrationReport) {
        let from_dir = planned.from_dir();
        if !from_dir.is_dir() {
            trace_move!("skipping absent module {}", planned.from_rel());
            report.record_skipped(planned.from_rel());
            return;
        }

        let dry_run = self.config.dry_run();
        if !dry_run
            && let Err(error) = fs::create_dir_all(planned.to_dir())
        {
            report.record_failure(format!(
                "failed to create {}: {error}",
                planned.to_dir().display()
            ));
            return;
        }

        let mut children: Vec<PathBuf> = match fs::read_dir(from_dir) {
            Ok(read_dir) => read_dir
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .collect(),
            Err(error) => {
                report.record_failure(format!("failed to list {}: {error}", from_dir.display()));
                return;
            }
        };
        children.sort();

        let mut moved = 0usize;
        for child in children {
            // Only direct file children move; nested subdirectories stay
            // behind and are surfaced through the report.
            if !child.is_file() {
                report.record_leftover(child);
                continue;
            }
            let Some(name) = child.file_name() else {
                continue;
            };
            let destination = planned.to_dir().join(name);

            if dry_run {
                trace_move!("would move {} -> {}", child.display(), destination.display());
                moved += 1;
                continue;
            }

            match move_file(&child, &destination) {
                Ok(()) => {
                    trace_move!("moved {} -> {}", child.display(), destination.display());
                    moved += 1;
                }
                Err(error) => {
                    report.record_failure(format!("failed to move {}: {error}", child.display()));
                }
            }
        }

        report.record_module(planned.from_rel(), planned.to_rel(), moved);

        if !dry_run {
            report.add_pruned(prune_emptied_dirs(from_dir, root));
        }
    }

    fn rewrite_references(&self, plan: &MigrationPlan, root: &Path, report: &mut MigrationReport) {
        // References to the moved packages can live outside the moved
        // subtrees, so the scan covers the directory above the root.
        let scan_root = root.parent().map_or_else(|| root.to_path_buf(), Path::to_path_buf);

        let walker = match WalkBuilder::new(&scan_root).build() {
            Ok(walker) => walker,
            Err(error) => {
                report.record_failure(format!(
                    "failed to scan {}: {error}",
                    scan_root.display()
                ));
                return;
            }
        };

        for entry in walker {
            if !entry.is_file() || !self.config.suffixes().matches(entry.full_path()) {
                continue;
            }
            self.rewrite_file(plan, entry.full_path(), report);
        }
    }

    fn rewrite_file(&self, plan: &MigrationPlan, path: &Path, report: &mut MigrationReport) {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                report.record_failure(format!("failed to read {}: {error}", path.display()));
                return;
            }
        };

        let rewritten = plan.rewrite(&content);
        if rewritten == content {
            return;
        }

        if self.config.dry_run() {
            trace_rewrite!("would correct references in {}", path.display());
            report.record_rewritten(path.to_path_buf());
            return;
        }

        match fs::write(path, rewritten.as_bytes()) {
            Ok(()) => {
                trace_rewrite!("corrected references in {}", path.display());
                report.record_rewritten(path.to_path_buf());
            }
            Err(error) => {
                report.record_failure(format!("failed to write {}: {error}", path.display()));
            }
        }
    }

    fn check_descriptor(&self, report: &mut MigrationReport) {
        if let Some(descriptor) = self.config.descriptor()
            && descriptor.exists()
        {
            report.set_descriptor_reminder(descriptor.to_path_buf());
        }
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf, MigrateError> {
    let canonical = fs::canonicalize(root).map_err(|source| MigrateError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    if !canonical.is_dir() {
        return Err(MigrateError::NotADirectory { path: canonical });
    }

    Ok(canonical)
}

fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        // Destinations on another filesystem cannot be renamed into place.
        Err(error) if error.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        Err(error) => Err(error),
    }
}

/// Removes the emptied source directory and its emptied ancestors, stopping
/// below the migration root and at the first directory that is not empty.
fn prune_emptied_dirs(start: &Path, root: &Path) -> usize {
    let mut pruned = 0;
    for dir in start.ancestors() {
        if dir == root || fs::remove_dir(dir).is_err() {
            break;
        }
        pruned += 1;
    }
    pruned
}
