// src/core/walker.rs
use std::path::Path;
use walkdir::WalkDir;

use crate::error::FlattenError;
use crate::models::FileCandidate;
use crate::utils::is_hidden;

/// Walks `base` pre-order, depth-first, in lexical order, yielding every
/// visible file within the depth limit.
///
/// A directory deeper than `depth_limit` is pruned whole, leaving a
/// notice; nothing beneath it is ever examined. Hidden entries (any path
/// segment starting with `.`) are pruned silently. The base itself is
/// always descended into, whatever its name. Directories are only used to
/// drive recursion and are never yielded as candidates.
///
/// # Errors
///
/// Returns [`FlattenError::Traversal`] if a directory cannot be listed.
pub fn collect_files(
    base: &Path,
    depth_limit: usize,
    notices: &mut Vec<String>,
) -> Result<Vec<FileCandidate>, FlattenError> {
    let mut files = Vec::new();
    let mut walker = WalkDir::new(base)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map_or_else(|| base.to_path_buf(), Path::to_path_buf);
                return Err(FlattenError::Traversal { path, source: err });
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        if is_hidden(&entry) {
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(base)
            .unwrap_or(entry.path())
            .to_path_buf();

        if entry.file_type().is_dir() {
            if entry.depth() > depth_limit {
                notices.push(format!(
                    "Skipped by depth limit: {} (depth {})",
                    relative.display(),
                    entry.depth()
                ));
                walker.skip_current_dir();
            }
            continue;
        }

        files.push(FileCandidate {
            path: entry.path().to_path_buf(),
            relative,
        });
    }

    Ok(files)
}
