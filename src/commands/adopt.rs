//! Command: copy files from home into the dotfiles tree.
use std::path::{Path, PathBuf};

use super::{Commands, Verb};
use crate::config::Roots;
use crate::engine::walker::walk;
use crate::error::{ErrorTree, PreconditionError};
use crate::resources::paths::{is_subpath, map};

impl Commands<'_> {
    /// Copy `from`, a file or directory under home, into the dotfiles root.
    ///
    /// `from` may also be the dotfiles root itself, which refreshes every
    /// tracked file from its home counterpart. In directory mode the
    /// direction is decided per file: a file inside the dotfiles root is
    /// overwritten from home, any other file is copied into the dotfiles root.
    ///
    /// # Errors
    ///
    /// Returns a [`PreconditionError`] if `from` is unreadable, outside home,
    /// or strictly inside the dotfiles root. Otherwise returns the joined
    /// per-file failures, headed by `error adopting directory` in directory
    /// mode.
    pub fn adopt_path(&self, from: &Path, roots: &Roots) -> Result<(), ErrorTree> {
        let from = Self::accessible(from)?;
        if from != roots.dotfiles {
            if !is_subpath(&from, &roots.home) {
                return Err(PreconditionError::NotASubpath {
                    path: from,
                    root: roots.home.clone(),
                }
                .into());
            }
            if is_subpath(&from, &roots.dotfiles) {
                return Err(PreconditionError::ForbiddenSubpath {
                    path: from,
                    root: roots.dotfiles.clone(),
                }
                .into());
            }
        }

        if from.is_file() {
            let to = map(&from, &roots.home, &roots.dotfiles);
            return self.replicate_logged(Verb::Adopt, &from, &to);
        }

        self.log.debugln(&format!("adopting directory {}", from.display()));
        let errors = walk(&from, |path| {
            let (origin, destination) = direction(path, roots);
            self.replicate_logged(Verb::Adopt, &origin, &destination)
        });
        Verb::Adopt.collect(errors)
    }
}

/// Source and destination for one file visited while adopting a directory.
fn direction(path: &Path, roots: &Roots) -> (PathBuf, PathBuf) {
    if is_subpath(path, &roots.dotfiles) {
        (map(path, &roots.dotfiles, &roots.home), path.to_path_buf())
    } else {
        (path.to_path_buf(), map(path, &roots.home, &roots.dotfiles))
    }
}
