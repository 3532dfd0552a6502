//! Tree walking and diffing used by the commands.
pub mod diff;
pub mod walker;
