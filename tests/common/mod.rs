// Shared helpers for integration tests.
//
// Provides a temporary home directory with a dotfiles directory inside it
// and a fluent builder so each integration test can lay out both trees
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use dots::config::{Roots, default_dotfiles_dir};

/// An isolated home/dotfiles pair backed by a [`tempfile::TempDir`].
///
/// The directories are deleted when the context is dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding the fake home directory.
    pub root: tempfile::TempDir,
    /// Resolved roots pointing into `root`.
    pub roots: Roots,
}

impl IntegrationTestContext {
    /// Create `<tmp>/home` and `<tmp>/home/.dotfiles/home`.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let home = root.path().join("home");
        let dotfiles = default_dotfiles_dir(&home);
        fs::create_dir_all(&dotfiles).expect("create dotfiles dir");
        Self {
            root,
            roots: Roots { home, dotfiles },
        }
    }

    /// The fake home directory.
    pub fn home(&self) -> &Path {
        &self.roots.home
    }

    /// The dotfiles directory inside home.
    pub fn dotfiles(&self) -> &Path {
        &self.roots.dotfiles
    }

    /// `home/<rel>`.
    pub fn home_path(&self, rel: &str) -> PathBuf {
        self.roots.home.join(rel)
    }

    /// `dotfiles/<rel>`.
    pub fn dotfiles_path(&self, rel: &str) -> PathBuf {
        self.roots.dotfiles.join(rel)
    }

    /// Read a file as a string.
    pub fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("read file")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context with empty trees.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` to `home/<rel>`, creating parents.
    pub fn with_home_file(self, rel: &str, content: &str) -> Self {
        write(&self.ctx.home_path(rel), content);
        self
    }

    /// Write `content` to `dotfiles/<rel>`, creating parents.
    pub fn with_dotfile(self, rel: &str, content: &str) -> Self {
        write(&self.ctx.dotfiles_path(rel), content);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, content).expect("write file");
}

/// Whether file permissions are enforced for this process.
///
/// Returns `false` when running as root, where mode bits do not stop reads
/// and writes; permission-dependent tests return early in that case.
#[cfg(unix)]
pub fn permissions_enforced() -> bool {
    use std::os::unix::fs::PermissionsExt as _;
    let dir = tempfile::tempdir().expect("create temp dir");
    let probe = dir.path().join("probe");
    fs::write(&probe, "x").expect("write probe");
    fs::set_permissions(&probe, fs::Permissions::from_mode(0o000)).expect("chmod probe");
    let enforced = fs::File::open(&probe).is_err();
    fs::set_permissions(&probe, fs::Permissions::from_mode(0o600)).expect("restore probe");
    enforced
}

/// Set the Unix mode bits of `path`.
#[cfg(unix)]
pub fn chmod(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt as _;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("chmod");
}
