//! Command: compare the dotfiles tree against home without touching either.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Commands;
use crate::engine::diff::{paint_line, unified};
use crate::engine::walker::walk;
use crate::error::{ErrorTree, PreconditionError};
use crate::resources::fs::is_readable;
use crate::resources::paths::{map, resolve_absolute};

impl Commands<'_> {
    /// Diff every regular file under `from_dir` against its counterpart under
    /// `to_dir`.
    ///
    /// Files whose counterpart is missing or unreadable are skipped with a
    /// warning. Returns `Ok(true)` when every compared pair is identical and
    /// `Ok(false)` when at least one differs.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::NotReadableDirectory`] if either directory
    /// is unusable, or a joined tree headed by `error diffing directory` if
    /// the walk failed or a file could not be read.
    pub fn diff_dirs(&self, from_dir: &Path, to_dir: &Path) -> Result<bool, ErrorTree> {
        let from_dir = readable_dir(from_dir)?;
        let to_dir = readable_dir(to_dir)?;
        self.log.debugln(&format!(
            "diffing {} against {}",
            from_dir.display(),
            to_dir.display()
        ));

        let mut differences = false;
        let errors = walk(&from_dir, |from| {
            let to = map(from, &from_dir, &to_dir);
            for path in [from, to.as_path()] {
                if !is_readable_file(path) {
                    self.log.warnln(&format!(
                        "File {} does not exist or is not a file or is not readable, skipping...",
                        self.path(path)
                    ));
                    return Ok(());
                }
            }

            if self.diff_file(from, &to)? {
                differences = true;
            }
            Ok(())
        });

        if errors.is_empty() {
            return Ok(!differences);
        }
        let mut joined = vec![ErrorTree::message("error diffing directory")];
        joined.extend(errors);
        Err(ErrorTree::joined(joined))
    }

    /// Diff one pair of files, logging the result. Returns whether they differ.
    fn diff_file(&self, from: &Path, to: &Path) -> Result<bool, ErrorTree> {
        let (a, b) = (self.path(from), self.path(to));
        self.log.log(&format!("Diffing {a} against {b} ..."));

        let (x, y) = match read_pair(from, to) {
            Ok(pair) => pair,
            Err(err) => {
                self.mark_failed();
                return Err(ErrorTree::joined(vec![
                    ErrorTree::message(format!("error diffing {a} against {b}")),
                    ErrorTree::leaf(err),
                ]));
            }
        };

        let text = unified(
            &from.display().to_string(),
            &to.display().to_string(),
            &x,
            &y,
        );
        if text.is_empty() {
            self.mark_ok();
            return Ok(false);
        }

        self.mark_failed();
        for line in text.trim().lines() {
            self.log.logln(&paint_line(self.palette, line));
        }
        Ok(true)
    }
}

fn readable_dir(path: &Path) -> Result<PathBuf, PreconditionError> {
    let abs = resolve_absolute(path).map_err(|source| PreconditionError::Absolute {
        path: path.to_path_buf(),
        source,
    })?;
    if !abs.is_dir() || !is_readable(&abs) {
        return Err(PreconditionError::NotReadableDirectory { path: abs });
    }
    Ok(abs)
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && is_readable(path)
}

fn read_pair(a: &Path, b: &Path) -> io::Result<(Vec<u8>, Vec<u8>)> {
    Ok((fs::read(a)?, fs::read(b)?))
}
