//! Dotfiles manager.
//!
//! Keeps a version-controlled dotfiles directory in sync with the home
//! directory. Every regular file under the dotfiles directory mirrors the file
//! at the same relative path under home.
//!
//! - **diff**: compare the two trees without touching either
//! - **apply**: copy dotfiles files into home
//! - **adopt**: copy home files into the dotfiles directory
//!
//! The public API is organised into layers:
//!
//! - **[`resources`]**: path mapping, readability probes and file replication
//! - **[`engine`]**: the tree walker and the unified diff
//! - **[`commands`]**: the three operations built on the walker
//! - **[`app`]**: flag handling and command dispatch
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod displays;
pub mod engine;
pub mod error;
pub mod logging;
pub mod resources;
