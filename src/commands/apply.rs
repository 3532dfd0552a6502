//! Command: copy files from the dotfiles tree into home.
use std::path::Path;

use super::{Commands, Verb};
use crate::config::Roots;
use crate::engine::walker::walk;
use crate::error::{ErrorTree, PreconditionError};
use crate::resources::paths::{is_subpath, map};

impl Commands<'_> {
    /// Copy `from`, a file or directory inside the dotfiles root, to the
    /// matching location under home.
    ///
    /// Every file is logged as `Applying A to B ...` followed by a mark.
    /// Failures of individual files do not stop a directory walk.
    ///
    /// # Errors
    ///
    /// Returns a [`PreconditionError`] if `from` is unreadable or outside the
    /// dotfiles root. Otherwise returns the joined per-file failures, headed
    /// by `error applying directory` in directory mode.
    pub fn apply_path(&self, from: &Path, roots: &Roots) -> Result<(), ErrorTree> {
        let from = Self::accessible(from)?;
        if !is_subpath(&from, &roots.dotfiles) {
            return Err(PreconditionError::NotASubpath {
                path: from,
                root: roots.dotfiles.clone(),
            }
            .into());
        }

        if from.is_file() {
            let to = map(&from, &roots.dotfiles, &roots.home);
            return self.replicate_logged(Verb::Apply, &from, &to);
        }

        self.log.debugln(&format!("applying directory {}", from.display()));
        let errors = walk(&from, |path| {
            let to = map(path, &roots.dotfiles, &roots.home);
            self.replicate_logged(Verb::Apply, path, &to)
        });
        Verb::Apply.collect(errors)
    }
}
