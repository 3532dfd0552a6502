//! Depth-first walk over the regular files of a tree.
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ErrorTree;

/// Visit every regular file under `root`, depth-first, in file-name order.
///
/// Directories, symlinks and special files are skipped; symlinks are not
/// followed. A `root` that is itself a regular file is visited once.
///
/// Errors returned by `visit` are collected and the walk continues. A
/// traversal error (vanished root, unreadable subdirectory) is collected and
/// ends the walk. An empty vector means every file was visited successfully.
pub fn walk<F>(root: &Path, mut visit: F) -> Vec<ErrorTree>
where
    F: FnMut(&Path) -> Result<(), ErrorTree>,
{
    let mut errors = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                errors.push(ErrorTree::leaf(err));
                break;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Err(err) = visit(entry.path()) {
            errors.push(err);
        }
    }
    errors
}
