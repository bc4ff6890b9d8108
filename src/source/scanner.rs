//! Project directory discovery
//!
//! Depth-first walk that records every directory holding the version-control
//! marker and never descends below one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub(crate) struct ScanOptions {
    /// Entry name that marks a project root, e.g. `.git`
    pub(crate) marker: String,
    /// Directories matching any of these by name or full path are skipped
    pub(crate) exclude: Vec<Pattern>,
}

impl ScanOptions {
    pub(crate) fn new(marker: impl Into<String>, exclude: &[String]) -> Result<Self, AppError> {
        let exclude = exclude
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| AppError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            marker: marker.into(),
            exclude,
        })
    }

    fn is_excluded(&self, dir: &Path) -> bool {
        let name = dir.file_name().map(|n| n.to_string_lossy());
        self.exclude.iter().any(|p| {
            p.matches_path(dir) || name.as_deref().is_some_and(|n| p.matches(n))
        })
    }

    fn has_marker(&self, dir: &Path) -> bool {
        dir.join(&self.marker).exists()
    }
}

/// Find every project directory below `root`.
///
/// The root itself is not checked for the marker. Children are visited in
/// file-name order. Symbolic links are never followed. An unreadable root is
/// an error; unreadable directories further down are skipped with a warning.
pub(crate) fn find_project_dirs(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, AppError> {
    let children = child_dirs(root).map_err(|source| AppError::Scan {
        path: root.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    for dir in children {
        visit(&dir, options, &mut found);
    }
    Ok(found)
}

fn visit(dir: &Path, options: &ScanOptions, found: &mut Vec<PathBuf>) {
    if options.is_excluded(dir) {
        debug!(dir = %dir.display(), "excluded");
        return;
    }
    if options.has_marker(dir) {
        found.push(dir.to_path_buf());
        return;
    }
    match child_dirs(dir) {
        Ok(children) => {
            for child in children {
                visit(&child, options, found);
            }
        }
        Err(e) => warn!(dir = %dir.display(), "skipping unreadable directory: {e}"),
    }
}

/// Immediate subdirectories, sorted. Symlinks are not treated as directories.
fn child_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), "skipping unreadable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}
