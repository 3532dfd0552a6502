//! Lexical path helpers: prefix mapping, absolute resolution, subpath test.
use std::io;
use std::path::{Component, Path, PathBuf};

/// Replace the leading `from` of `path` with `to`.
///
/// The remainder after `from` is kept as-is. A `path` equal to `from` maps to
/// `to`; a `path` outside `from` is returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use dots::resources::paths::map;
///
/// let mapped = map(Path::new("/d/.config/x"), Path::new("/d"), Path::new("/h"));
/// assert_eq!(mapped, Path::new("/h/.config/x"));
/// ```
#[must_use]
pub fn map(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) if rest.as_os_str().is_empty() => to.to_path_buf(),
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Make `path` absolute against the current directory and drop `.` and `..`
/// components without touching the filesystem.
///
/// Symlinks are not resolved, so `a/link/..` becomes `a`.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or `path`
/// is empty.
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    Ok(cleaned)
}

/// Whether `path` equals `root` or lies beneath it, compared component-wise.
#[must_use]
pub fn is_subpath(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
