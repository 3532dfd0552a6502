//! Resolution of the home and dotfiles roots.
//!
//! The dotfiles directory comes from, in order of precedence:
//!
//! 1. the `DOTS_DOTFILES_FILES_DIR` environment variable, when non-empty
//! 2. the `--dotfilesFilesDir` flag
//! 3. `<home>/.dotfiles/home`
//!
//! Both roots are made absolute and must be readable directories.
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::resources::fs::is_readable;
use crate::resources::paths::resolve_absolute;

/// Environment variable overriding the dotfiles directory.
pub const DOTFILES_DIR_ENV: &str = "DOTS_DOTFILES_FILES_DIR";

/// The pair of trees kept in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// The user's home directory.
    pub home: PathBuf,
    /// The version-controlled mirror of `home`.
    pub dotfiles: PathBuf,
}

impl Roots {
    /// Resolve both roots from the process environment and the
    /// `--dotfilesFilesDir` flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or either root is
    /// not a readable directory.
    pub fn resolve(flag: Option<&Path>) -> Result<Self, ConfigError> {
        let home = non_empty(env::var_os("HOME")).or_else(|| non_empty(env::var_os("USERPROFILE")));
        Self::resolve_with(home, env::var_os(DOTFILES_DIR_ENV), flag)
    }

    /// Resolve both roots from explicit inputs.
    ///
    /// `home` is the raw home directory, `env_dir` the raw value of
    /// [`DOTFILES_DIR_ENV`] and `flag` the `--dotfilesFilesDir` value. Empty
    /// strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `home` is unset or either root is not a readable
    /// directory.
    pub fn resolve_with(
        home: Option<OsString>,
        env_dir: Option<OsString>,
        flag: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let home = non_empty(home).ok_or(ConfigError::HomeNotFound)?;
        let home = absolute(Path::new(&home))?;
        if !is_readable_dir(&home) {
            return Err(ConfigError::InvalidHome { path: home });
        }

        let dotfiles = non_empty(env_dir)
            .map(PathBuf::from)
            .or_else(|| flag.filter(|p| !p.as_os_str().is_empty()).map(Path::to_path_buf))
            .unwrap_or_else(|| default_dotfiles_dir(&home));
        let dotfiles = absolute(&dotfiles)?;
        if !is_readable_dir(&dotfiles) {
            return Err(ConfigError::InvalidDotfilesDir { path: dotfiles });
        }

        Ok(Self { home, dotfiles })
    }
}

/// `<home>/.dotfiles/home`.
#[must_use]
pub fn default_dotfiles_dir(home: &Path) -> PathBuf {
    home.join(".dotfiles").join("home")
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    resolve_absolute(path).map_err(|source| ConfigError::Absolute {
        path: path.to_path_buf(),
        source,
    })
}

fn is_readable_dir(path: &Path) -> bool {
    path.is_dir() && is_readable(path)
}
