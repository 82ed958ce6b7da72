use std::fs;
use std::path::{Path, PathBuf};

use filters::IgnoreRules;
use logging::trace_tree;

use crate::config::TreeConfig;
use crate::error::TreeError;

/// Renders tree snapshots according to a [`TreeConfig`].
///
/// The renderer owns an effective rule set: the configured screening rules
/// plus a reservation for the output file name, so the snapshot never lists
/// its own artifact.
#[derive(Clone, Debug)]
pub struct TreeRenderer {
    config: TreeConfig,
    rules: IgnoreRules,
}

/// Rendered snapshot text along with the number of listed entries.
#[derive(Clone, Debug)]
pub struct TreeSnapshot {
    text: String,
    entries: usize,
}

impl TreeSnapshot {
    /// Returns the rendered snapshot text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the snapshot and returns its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the number of entries listed below the header.
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }
}

/// Summary of a snapshot that was written to disk.
#[derive(Clone, Debug)]
pub struct TreeReport {
    output_path: PathBuf,
    entries: usize,
}

impl TreeReport {
    /// Returns the path the snapshot was written to.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the number of entries listed below the header.
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }
}

struct EntryInfo {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_file: bool,
}

impl TreeRenderer {
    /// Creates a renderer for the given configuration.
    #[must_use]
    pub fn new(config: TreeConfig) -> Self {
        let rules = config
            .rules()
            .clone()
            .with_reserved_name(config.output_file().to_owned());
        Self { config, rules }
    }

    /// Renders the snapshot without writing it anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] when the configured root cannot be resolved to
    /// a directory.
    pub fn render(&self) -> Result<TreeSnapshot, TreeError> {
        let root = resolve_root(self.config.root())?;
        Ok(self.render_resolved(&root))
    }

    /// Renders the snapshot and writes it into the inspected root.
    ///
    /// Any previous snapshot file is truncated. The write happens after the
    /// full tree has been rendered, so a failed run never leaves a partial
    /// snapshot next to a complete one.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] when the root cannot be resolved or the output
    /// file cannot be written.
    pub fn write(&self) -> Result<TreeReport, TreeError> {
        let root = resolve_root(self.config.root())?;
        let snapshot = self.render_resolved(&root);

        let output_path = root.join(self.config.output_file());
        fs::write(&output_path, snapshot.text.as_bytes()).map_err(|source| TreeError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(TreeReport {
            output_path,
            entries: snapshot.entries,
        })
    }

    fn render_resolved(&self, root: &Path) -> TreeSnapshot {
        let mut text = format!("📦 {}/\n", root_display_name(root));
        let mut entries = 0usize;
        self.render_children(root, "", 1, &mut text, &mut entries);
        trace_tree!("rendered {} entries under {}", entries, root.display());

        TreeSnapshot { text, entries }
    }

    fn render_children(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        out: &mut String,
        count: &mut usize,
    ) {
        if depth > self.config.max_depth() {
            return;
        }

        let Some(mut items) = read_entries(dir) else {
            return;
        };

        items.retain(|item| !self.ignores(item));
        items.sort_by_key(|item| (item.is_file, item.name.to_lowercase(), item.name.clone()));

        let last_index = items.len().saturating_sub(1);
        for (index, item) in items.iter().enumerate() {
            let is_last = index == last_index;
            let connector = if is_last { "└── " } else { "├── " };

            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&item.name);
            if item.is_dir {
                out.push('/');
            }
            out.push('\n');
            *count += 1;

            if item.is_dir {
                let rail = if is_last { "    " } else { "│   " };
                let child_prefix = format!("{prefix}{rail}");
                self.render_children(&item.path, &child_prefix, depth + 1, out, count);
            }
        }
    }

    fn ignores(&self, item: &EntryInfo) -> bool {
        if self.rules.is_reserved(&item.name) {
            return true;
        }
        if item.is_dir && self.rules.ignores_dir_name(&item.name) {
            return true;
        }
        item.is_file && self.rules.ignores_file_name(&item.name)
    }
}

fn read_entries(dir: &Path) -> Option<Vec<EntryInfo>> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(error) => {
            trace_tree!(
                "treating unreadable directory {} as empty: {}",
                dir.display(),
                error
            );
            return None;
        }
    };

    let mut items = Vec::new();
    for entry in read_dir {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        // is_dir and is_file both follow symlinks, so a symlinked directory
        // renders and recurses like a real one; the depth bound keeps any
        // self-referential link from recursing forever.
        items.push(EntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: path.is_dir(),
            is_file: path.is_file(),
            path,
        });
    }

    Some(items)
}

fn resolve_root(root: &Path) -> Result<PathBuf, TreeError> {
    let canonical = fs::canonicalize(root).map_err(|source| TreeError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    if !canonical.is_dir() {
        return Err(TreeError::NotADirectory { path: canonical });
    }

    Ok(canonical)
}

fn root_display_name(root: &Path) -> String {
    root.file_name().map_or_else(
        || root.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}
