//! Directory traversal producing index candidates.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::IndexPredicate;
use crate::error::{IndexGenError, Result};

/// Walks `root` recursively and returns the absolute paths of all regular
/// files accepted by the predicate.
///
/// Standard ignore-file and hidden-file filtering is disabled; the predicate
/// is the only gate on the candidate set. Unreadable entries are skipped
/// with a warning. No ordering guarantee.
pub fn scan_directory(root: &Path, should_be_indexed: &IndexPredicate) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IndexGenError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        let is_file = entry.file_type().is_some_and(|kind| kind.is_file());
        if is_file && should_be_indexed(entry.path()) {
            paths.push(entry.path().to_path_buf());
        }
    }
    Ok(paths)
}
