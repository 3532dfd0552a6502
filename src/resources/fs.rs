//! File-system probes and the single-file replicator.
use std::fs;
use std::path::Path;

use super::error::ReplicateError;

/// Whether `path` can be opened for reading.
///
/// FIFOs, sockets and device nodes count as readable without being opened,
/// since opening them may block or have side effects. Anything else is probed
/// with [`fs::File::open`]. A failing `stat` means unreadable.
#[must_use]
pub fn is_readable(path: &Path) -> bool {
    let Ok(meta) = fs::metadata(path) else {
        return false;
    };
    if is_special(&meta.file_type()) {
        return true;
    }
    fs::File::open(path).is_ok()
}

/// Whether `path` exists and [`is_readable`].
#[must_use]
pub fn is_accessible(path: &Path) -> bool {
    path.exists() && is_readable(path)
}

#[cfg(unix)]
fn is_special(file_type: &fs::FileType) -> bool {
    use std::os::unix::fs::FileTypeExt as _;
    file_type.is_fifo()
        || file_type.is_socket()
        || file_type.is_char_device()
        || file_type.is_block_device()
}

#[cfg(not(unix))]
const fn is_special(_file_type: &fs::FileType) -> bool {
    false
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns [`ReplicateError::CreateDir`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ReplicateError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ReplicateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Copy the bytes of `source` over `dest`, creating missing ancestors of
/// `dest` first.
///
/// An existing `dest` is truncated and overwritten. A new `dest` gets the
/// permission bits of `source`.
///
/// # Errors
///
/// Returns [`ReplicateError::CreateDir`] if an ancestor cannot be created and
/// [`ReplicateError::Copy`] if `source` cannot be read or `dest` cannot be
/// written.
pub fn replicate(source: &Path, dest: &Path) -> Result<(), ReplicateError> {
    ensure_parent_dir(dest)?;
    fs::copy(source, dest).map_err(|err| ReplicateError::Copy {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        source: err,
    })?;
    Ok(())
}
