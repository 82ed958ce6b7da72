use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use logging::trace_export;
use walk::WalkBuilder;

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::strip::{CommentStyle, clean_source};

/// Runs the export described by an [`ExportConfig`].
#[derive(Clone, Debug)]
pub struct Exporter {
    config: ExportConfig,
}

/// Summary of a finished export.
#[derive(Clone, Debug)]
pub struct ExportReport {
    output_path: PathBuf,
    exported: Vec<PathBuf>,
    failures: Vec<String>,
}

impl ExportReport {
    /// Returns the path the dump was written to.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the exported files, relative to the root, in walk order.
    #[must_use]
    pub fn exported(&self) -> &[PathBuf] {
        &self.exported
    }

    /// Returns the per-file failures absorbed during the run.
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

impl Exporter {
    /// Creates an exporter for the given configuration.
    #[must_use]
    pub const fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Walks the root and writes the concatenated dump.
    ///
    /// The output file is created up front and truncated, then filled while
    /// the walk makes progress. Files that cannot be read are recorded in
    /// the report and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the root cannot be resolved or the
    /// output file cannot be created or written.
    pub fn run(&self) -> Result<ExportReport, ExportError> {
        let root = resolve_root(self.config.root())?;
        let output_path = root.join(self.config.output_file());

        let file = fs::File::create(&output_path).map_err(|source| ExportError::Write {
            path: output_path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let walker = WalkBuilder::new(&root)
            .include_root(false)
            .build()
            .map_err(|source| ExportError::Scan { source })?;

        let rule = "=".repeat(50);
        let mut exported = Vec::new();
        let mut failures = Vec::new();

        for entry in walker {
            if !entry.is_file() || entry.full_path() == output_path {
                continue;
            }
            if !self.config.suffixes().matches(entry.relative_path()) {
                continue;
            }
            let parent = entry
                .relative_path()
                .parent()
                .unwrap_or_else(|| Path::new(""));
            if self.config.skip().matches_path(parent) {
                continue;
            }

            let content = match fs::read_to_string(entry.full_path()) {
                Ok(content) => content,
                Err(error) => {
                    failures.push(format!(
                        "failed to read {}: {error}",
                        entry.full_path().display()
                    ));
                    continue;
                }
            };

            let cleaned = clean_source(&content, style_for(entry.relative_path()));
            let relative = entry.relative_path().display();
            write!(writer, "\n{rule}\nFILE: {relative}\n{rule}\n\n{cleaned}\n").map_err(
                |source| ExportError::Write {
                    path: output_path.clone(),
                    source,
                },
            )?;

            trace_export!("exported {relative}");
            exported.push(entry.relative_path().to_path_buf());
        }

        writer.flush().map_err(|source| ExportError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(ExportReport {
            output_path,
            exported,
            failures,
        })
    }
}

fn style_for(path: &Path) -> CommentStyle {
    path.extension().map_or(CommentStyle::Plain, |extension| {
        let suffix = format!(".{}", extension.to_string_lossy().to_lowercase());
        CommentStyle::for_suffix(&suffix)
    })
}

fn resolve_root(root: &Path) -> Result<PathBuf, ExportError> {
    let canonical = fs::canonicalize(root).map_err(|source| ExportError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    if !canonical.is_dir() {
        return Err(ExportError::NotADirectory { path: canonical });
    }

    Ok(canonical)
}
