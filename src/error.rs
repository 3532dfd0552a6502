//! Error types for the dots commands.
//!
//! Typed errors are built with [`thiserror`]. Commands fold them into an
//! [`ErrorTree`], which keeps going past per-file failures and is printed
//! with increasing indentation by [`log_errors`].
//!
//! # Error hierarchy
//!
//! ```text
//! ErrorTree
//! ├── Leaf(anyhow::Error)   PreconditionError, ConfigError, ReplicateError, io
//! └── Joined(Vec<ErrorTree>)
//!     ├── "error applying directory"
//!     ├── Joined["error applying A to B", cause]
//!     └── ...
//! ```

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::logging::Log;
use crate::resources::ReplicateError;

/// Invalid command arguments, detected before any file is touched.
#[derive(Error, Debug)]
pub enum PreconditionError {
    /// The path is missing or cannot be opened for reading.
    #[error("path {} does not exist or is not readable", path.display())]
    Unreadable {
        /// Offending path.
        path: PathBuf,
    },

    /// The path is missing, is not a directory, or cannot be read.
    #[error("path {} does not exist or is not a directory or is not readable", path.display())]
    NotReadableDirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// The path lies outside the root it must belong to.
    #[error("path {} is not a subpath of {}", path.display(), root.display())]
    NotASubpath {
        /// Offending path.
        path: PathBuf,
        /// Root the path was expected under.
        root: PathBuf,
    },

    /// The path lies inside a root it must stay out of.
    #[error("path {} can not be a subpath of {}", path.display(), root.display())]
    ForbiddenSubpath {
        /// Offending path.
        path: PathBuf,
        /// Root the path must not be under.
        root: PathBuf,
    },

    /// The path could not be made absolute.
    #[error("could not resolve {}: {source}", path.display())]
    Absolute {
        /// Path as given.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Failures resolving the home and dotfiles roots.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `HOME` nor `USERPROFILE` is set.
    #[error("could not determine the home directory")]
    HomeNotFound,

    /// The home directory is unusable.
    #[error("homedir {} does not exist or is not a directory or is not readable", path.display())]
    InvalidHome {
        /// Resolved home path.
        path: PathBuf,
    },

    /// The dotfiles directory is unusable.
    #[error("dotfiles \"{}\" does not exist or is not a directory or is not readable", path.display())]
    InvalidDotfilesDir {
        /// Resolved dotfiles path.
        path: PathBuf,
    },

    /// A root could not be made absolute.
    #[error("could not resolve {}: {source}", path.display())]
    Absolute {
        /// Path as given.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Aggregated failure of a command.
///
/// A `Joined` node prints its first child as a heading and the remaining
/// children indented beneath it, so `Joined[marker, failures...]` reads as a
/// titled list.
#[derive(Debug)]
pub enum ErrorTree {
    /// A single error.
    Leaf(anyhow::Error),
    /// An ordered group of errors.
    Joined(Vec<ErrorTree>),
}

impl ErrorTree {
    /// A leaf holding a plain message.
    #[must_use]
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Leaf(anyhow::Error::msg(msg.into()))
    }

    /// A leaf wrapping any error.
    #[must_use]
    pub fn leaf(err: impl Into<anyhow::Error>) -> Self {
        Self::Leaf(err.into())
    }

    /// A group of errors.
    #[must_use]
    pub const fn joined(children: Vec<Self>) -> Self {
        Self::Joined(children)
    }

    /// Children of a `Joined` node; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Leaf(_) => &[],
            Self::Joined(children) => children,
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(err) => write!(f, "{err}"),
            Self::Joined(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ErrorTree {}

impl From<PreconditionError> for ErrorTree {
    fn from(err: PreconditionError) -> Self {
        Self::leaf(err)
    }
}

impl From<ConfigError> for ErrorTree {
    fn from(err: ConfigError) -> Self {
        Self::leaf(err)
    }
}

impl From<ReplicateError> for ErrorTree {
    fn from(err: ReplicateError) -> Self {
        Self::leaf(err)
    }
}

/// Print `err` through `log`.
///
/// The top level goes through [`Log::errorln`]; nested errors are printed
/// with [`Log::logln`] as `-> msg`, indented two more spaces per level.
pub fn log_errors(log: &dyn Log, err: &ErrorTree) {
    log_errors_at(log, err, 0);
}

fn log_errors_at(log: &dyn Log, err: &ErrorTree, depth: usize) {
    match err {
        ErrorTree::Leaf(_) => log_line(log, &err.to_string(), depth),
        ErrorTree::Joined(children) => {
            let Some((first, rest)) = children.split_first() else {
                return;
            };
            log_line(log, &first.to_string(), depth);
            for child in rest {
                log_errors_at(log, child, depth + 2);
            }
        }
    }
}

fn log_line(log: &dyn Log, msg: &str, depth: usize) {
    if depth == 0 {
        log.errorln(msg);
    } else {
        log.logln(&format!("{}-> {msg}", " ".repeat(depth)));
    }
}
