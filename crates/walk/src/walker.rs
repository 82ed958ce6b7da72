use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use logging::trace_scan;

use crate::entry::WalkEntry;
use crate::error::WalkError;

/// Depth-first iterator over filesystem entries.
pub struct Walker {
    root: PathBuf,
    follow_symlinks: bool,
    max_depth: Option<usize>,
    yielded_root: bool,
    root_metadata: Option<fs::Metadata>,
    stack: Vec<DirectoryState>,
    visited: HashSet<PathBuf>,
}

impl Walker {
    pub(crate) fn new(
        root: PathBuf,
        follow_symlinks: bool,
        include_root: bool,
        max_depth: Option<usize>,
    ) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        trace_scan!("scanning {}", root.display());

        let metadata = fs::symlink_metadata(&root)
            .map_err(|error| WalkError::root_metadata(root.clone(), error))?;

        let mut walker = Self {
            root,
            follow_symlinks,
            max_depth,
            yielded_root: !include_root,
            root_metadata: Some(metadata),
            stack: Vec::new(),
            visited: HashSet::new(),
        };

        let descend = walker.max_depth.is_none_or(|limit| limit > 0);
        let file_type = walker.root_metadata.as_ref().map(fs::Metadata::file_type);
        if let Some(file_type) = file_type {
            if descend {
                if file_type.is_dir() {
                    walker.push_directory(walker.root.clone(), PathBuf::new(), 0);
                } else if file_type.is_symlink()
                    && walker.follow_symlinks
                    && fs::metadata(&walker.root).is_ok_and(|target| target.is_dir())
                {
                    walker.push_directory(walker.root.clone(), PathBuf::new(), 0);
                }
            }
        }

        Ok(walker)
    }

    fn push_directory(&mut self, fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) {
        if self.follow_symlinks {
            match fs::canonicalize(&fs_path) {
                Ok(canonical) => {
                    if !self.visited.insert(canonical) {
                        trace_scan!(
                            "skipping already visited directory {}",
                            fs_path.display()
                        );
                        return;
                    }
                }
                Err(error) => {
                    trace_scan!("not descending into {}: {}", fs_path.display(), error);
                    return;
                }
            }
        }

        self.stack
            .push(DirectoryState::new(fs_path, relative_prefix, depth));
    }

    fn prepare_entry(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
        depth: usize,
    ) -> Option<WalkEntry> {
        let metadata = match fs::symlink_metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(error) => {
                trace_scan!("skipping {}: {}", full_path.display(), error);
                return None;
            }
        };

        if self.max_depth.is_none_or(|limit| depth < limit) {
            let file_type = metadata.file_type();
            if file_type.is_dir() {
                self.push_directory(full_path.clone(), relative_path.clone(), depth);
            } else if file_type.is_symlink()
                && self.follow_symlinks
                && fs::metadata(&full_path).is_ok_and(|target| target.is_dir())
            {
                self.push_directory(full_path.clone(), relative_path.clone(), depth);
            }
        }

        Some(WalkEntry {
            full_path,
            relative_path,
            metadata,
            depth,
            is_root: false,
        })
    }
}

impl Iterator for Walker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.yielded_root {
            self.yielded_root = true;
            if let Some(metadata) = self.root_metadata.take() {
                return Some(WalkEntry {
                    full_path: self.root.clone(),
                    relative_path: PathBuf::new(),
                    metadata,
                    depth: 0,
                    is_root: true,
                });
            }
        }

        loop {
            let (full_path, relative_path, depth) = {
                let state = self.stack.last_mut()?;

                if let Some(name) = state.next_name() {
                    let full_path = state.fs_path.join(&name);
                    let relative_path = if state.relative_prefix.as_os_str().is_empty() {
                        PathBuf::from(&name)
                    } else {
                        let mut rel = state.relative_prefix.clone();
                        rel.push(&name);
                        rel
                    };
                    (full_path, relative_path, state.depth + 1)
                } else {
                    self.stack.pop();
                    continue;
                }
            };

            if let Some(entry) = self.prepare_entry(full_path, relative_path, depth) {
                return Some(entry);
            }
        }
    }
}

#[derive(Clone, Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: Vec<OsString>,
    index: usize,
    depth: usize,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) -> Self {
        let mut entries = Vec::new();
        match fs::read_dir(&fs_path) {
            Ok(read_dir) => {
                for entry in read_dir {
                    match entry {
                        Ok(entry) => entries.push(entry.file_name()),
                        Err(error) => {
                            trace_scan!(
                                "skipping unreadable entry in {}: {}",
                                fs_path.display(),
                                error
                            );
                        }
                    }
                }
            }
            Err(error) => {
                trace_scan!(
                    "treating unreadable directory {} as empty: {}",
                    fs_path.display(),
                    error
                );
            }
        }
        entries.sort();

        Self {
            fs_path,
            relative_prefix,
            entries,
            index: 0,
            depth,
        }
    }

    fn next_name(&mut self) -> Option<OsString> {
        if let Some(name) = self.entries.get(self.index) {
            self.index += 1;
            Some(name.clone())
        } else {
            None
        }
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().map_err(WalkError::working_directory)?;
        Ok(cwd.join(path))
    }
}
