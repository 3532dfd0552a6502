//! The `diff`, `apply` and `adopt` commands.
//!
//! All three walk a tree, map every regular file onto the other root and run
//! one action per file. They differ in validation, direction and action.
pub mod adopt;
pub mod apply;
pub mod diff;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Roots;
use crate::error::{ErrorTree, PreconditionError};
use crate::logging::{Log, Palette};
use crate::resources::fs::{is_accessible, replicate};
use crate::resources::paths::resolve_absolute;

/// The operations the application dispatches to.
#[cfg_attr(test, mockall::automock)]
pub trait Operations {
    /// Compare every file under `from_dir` with its counterpart under
    /// `to_dir`. `Ok(false)` means differences were found.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory is unusable or a file could not be
    /// compared.
    fn diff(&self, from_dir: &Path, to_dir: &Path) -> Result<bool, ErrorTree>;

    /// Copy `from` (a file or directory under the dotfiles root) to home.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is invalid or any file failed to copy.
    fn apply(&self, from: &Path, roots: &Roots) -> Result<(), ErrorTree>;

    /// Copy `from` (a file or directory under home) into the dotfiles root.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is invalid or any file failed to copy.
    fn adopt(&self, from: &Path, roots: &Roots) -> Result<(), ErrorTree>;
}

/// Which way files are copied, used to phrase progress and error lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Apply,
    Adopt,
}

impl Verb {
    const fn progressive(self) -> &'static str {
        match self {
            Self::Apply => "Applying",
            Self::Adopt => "Adopting",
        }
    }

    const fn lower(self) -> &'static str {
        match self {
            Self::Apply => "applying",
            Self::Adopt => "adopting",
        }
    }

    /// Fold the per-file errors of a directory walk into one result.
    fn collect(self, errors: Vec<ErrorTree>) -> Result<(), ErrorTree> {
        if errors.is_empty() {
            return Ok(());
        }
        let mut joined = Vec::with_capacity(errors.len() + 1);
        joined.push(ErrorTree::message(format!("error {} directory", self.lower())));
        joined.extend(errors);
        Err(ErrorTree::joined(joined))
    }
}

/// Command runner writing progress to a [`Log`].
pub struct Commands<'a> {
    log: &'a dyn Log,
    palette: Palette,
}

impl fmt::Debug for Commands<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commands")
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

impl<'a> Commands<'a> {
    /// Create a runner logging to `log` and coloring with `palette`.
    #[must_use]
    pub const fn new(log: &'a dyn Log, palette: Palette) -> Self {
        Self { log, palette }
    }

    fn path(&self, path: &Path) -> String {
        self.palette.blue(path.display())
    }

    fn mark_ok(&self) {
        self.log.logln(&self.palette.green(" ✓"));
    }

    fn mark_failed(&self) {
        self.log.logln(&self.palette.red(" ✕"));
    }

    /// Resolve `from` to an absolute path that exists and can be read.
    fn accessible(from: &Path) -> Result<PathBuf, PreconditionError> {
        let from = resolve_absolute(from).map_err(|source| PreconditionError::Absolute {
            path: from.to_path_buf(),
            source,
        })?;
        if !is_accessible(&from) {
            return Err(PreconditionError::Unreadable { path: from });
        }
        Ok(from)
    }

    /// Copy one file, logging the progress line and its outcome mark.
    fn replicate_logged(&self, verb: Verb, from: &Path, to: &Path) -> Result<(), ErrorTree> {
        let (a, b) = (self.path(from), self.path(to));
        self.log.log(&format!("{} {a} to {b} ...", verb.progressive()));
        match replicate(from, to) {
            Ok(()) => {
                self.mark_ok();
                Ok(())
            }
            Err(err) => {
                self.mark_failed();
                Err(ErrorTree::joined(vec![
                    ErrorTree::message(format!("error {} {a} to {b}", verb.lower())),
                    err.into(),
                ]))
            }
        }
    }
}

impl Operations for Commands<'_> {
    fn diff(&self, from_dir: &Path, to_dir: &Path) -> Result<bool, ErrorTree> {
        self.diff_dirs(from_dir, to_dir)
    }

    fn apply(&self, from: &Path, roots: &Roots) -> Result<(), ErrorTree> {
        self.apply_path(from, roots)
    }

    fn adopt(&self, from: &Path, roots: &Roots) -> Result<(), ErrorTree> {
        self.adopt_path(from, roots)
    }
}
