//! File-system primitives shared by the commands.
pub mod error;
pub mod fs;
pub mod paths;

pub use error::ReplicateError;
