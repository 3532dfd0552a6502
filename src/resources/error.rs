//! Typed error variants for file replication.
//!
//! [`replicate`](super::fs::replicate) returns these; commands wrap them in an
//! "error applying A to B" layer of the [`ErrorTree`](crate::error::ErrorTree).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise while copying one file into place.
#[derive(Error, Debug)]
pub enum ReplicateError {
    /// A missing ancestor of the destination could not be created.
    #[error("could not create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The bytes could not be copied.
    #[error("could not copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        /// Source file.
        from: PathBuf,
        /// Destination file.
        to: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
