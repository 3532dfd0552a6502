#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `apply` command.

mod common;

use std::path::Path;

use common::{IntegrationTestContext, TestContextBuilder};
use dots::commands::Commands;
use dots::logging::{Level, Palette, RecordingLog};

fn apply(ctx: &IntegrationTestContext, from: &Path) -> (Result<(), String>, RecordingLog) {
    let log = RecordingLog::new();
    let result = Commands::new(&log, Palette::plain())
        .apply_path(from, &ctx.roots)
        .map_err(|e| e.to_string());
    (result, log)
}

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

/// `from` is made absolute and `..` is resolved before it is checked.
#[test]
fn from_path_is_normalized() {
    let ctx = IntegrationTestContext::new();
    let (result, log) = apply(&ctx, Path::new("/foo/bar/.."));
    assert_eq!(
        result.unwrap_err(),
        "path /foo does not exist or is not readable"
    );
    assert!(log.is_empty());
}

#[test]
fn missing_from_is_rejected() {
    let ctx = IntegrationTestContext::new();
    let from = ctx.dotfiles_path("nope");
    let (result, log) = apply(&ctx, &from);
    assert_eq!(
        result.unwrap_err(),
        format!("path {} does not exist or is not readable", from.display())
    );
    assert!(log.is_empty());
}

#[cfg(unix)]
#[test]
fn unreadable_from_is_rejected() {
    if !common::permissions_enforced() {
        return;
    }
    let ctx = IntegrationTestContext::new();
    let from = ctx.dotfiles_path("locked");
    std::fs::create_dir(&from).unwrap();
    common::chmod(&from, 0o300);

    let (result, _) = apply(&ctx, &from);
    common::chmod(&from, 0o700);
    assert!(result.unwrap_err().ends_with("does not exist or is not readable"));
}

#[test]
fn from_outside_dotfiles_is_rejected() {
    let ctx = TestContextBuilder::new()
        .with_home_file(".bashrc", "x")
        .build();
    let from = ctx.home_path(".bashrc");
    let (result, log) = apply(&ctx, &from);
    assert_eq!(
        result.unwrap_err(),
        format!(
            "path {} is not a subpath of {}",
            from.display(),
            ctx.dotfiles().display()
        )
    );
    assert!(log.is_empty());
}

// ---------------------------------------------------------------------------
// Single file
// ---------------------------------------------------------------------------

#[test]
fn applies_single_file() {
    let ctx = TestContextBuilder::new()
        .with_dotfile(".config/nvim/init.lua", "vim.o.number = true")
        .build();
    let from = ctx.dotfiles_path(".config/nvim/init.lua");
    let to = ctx.home_path(".config/nvim/init.lua");

    let (result, log) = apply(&ctx, &from);

    result.unwrap();
    assert_eq!(IntegrationTestContext::read(&to), "vim.o.number = true");
    assert_eq!(
        log.messages(Level::Plain, false),
        vec![format!("Applying {} to {} ...", from.display(), to.display())]
    );
    assert_eq!(log.messages(Level::Plain, true), vec![" ✓"]);
}

#[test]
fn overwrites_existing_home_file() {
    let ctx = TestContextBuilder::new()
        .with_dotfile(".profile", "new")
        .with_home_file(".profile", "old and longer")
        .build();
    let (result, _) = apply(&ctx, &ctx.dotfiles_path(".profile"));
    result.unwrap();
    assert_eq!(IntegrationTestContext::read(&ctx.home_path(".profile")), "new");
}

#[cfg(unix)]
#[test]
fn single_file_failure_is_wrapped() {
    if !common::permissions_enforced() {
        return;
    }
    let ctx = TestContextBuilder::new()
        .with_dotfile(".bashrc", "new")
        .with_home_file(".bashrc", "old")
        .build();
    let from = ctx.dotfiles_path(".bashrc");
    let to = ctx.home_path(".bashrc");
    common::chmod(&to, 0o400);

    let log = RecordingLog::new();
    let err = Commands::new(&log, Palette::plain())
        .apply_path(&from, &ctx.roots)
        .unwrap_err();

    let children = err.children();
    assert_eq!(children.len(), 2);
    assert_eq!(
        children[0].to_string(),
        format!("error applying {} to {}", from.display(), to.display())
    );
    assert!(children[1].to_string().contains(&to.display().to_string()));
    assert_eq!(log.count(Level::Plain, false), 1);
    assert_eq!(log.messages(Level::Plain, true), vec![" ✕"]);
    assert_eq!(IntegrationTestContext::read(&to), "old");
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

#[test]
fn applies_directory_in_name_order() {
    let ctx = TestContextBuilder::new()
        .with_dotfile("1-first", "1")
        .with_dotfile("2-second", "2")
        .build();

    let (result, log) = apply(&ctx, ctx.dotfiles());

    result.unwrap();
    assert_eq!(
        log.messages(Level::Plain, false),
        vec![
            format!(
                "Applying {} to {} ...",
                ctx.dotfiles_path("1-first").display(),
                ctx.home_path("1-first").display()
            ),
            format!(
                "Applying {} to {} ...",
                ctx.dotfiles_path("2-second").display(),
                ctx.home_path("2-second").display()
            ),
        ]
    );
    assert_eq!(log.messages(Level::Plain, true), vec![" ✓", " ✓"]);
    assert_eq!(IntegrationTestContext::read(&ctx.home_path("2-second")), "2");
}

#[test]
fn applies_subdirectory_only() {
    let ctx = TestContextBuilder::new()
        .with_dotfile(".config/a", "a")
        .with_dotfile(".other", "o")
        .build();

    let (result, _) = apply(&ctx, &ctx.dotfiles_path(".config"));

    result.unwrap();
    assert!(ctx.home_path(".config/a").exists());
    assert!(!ctx.home_path(".other").exists());
}

#[cfg(unix)]
#[test]
fn directory_failures_are_collected() {
    if !common::permissions_enforced() {
        return;
    }
    let ctx = TestContextBuilder::new()
        .with_dotfile("1-ok", "1")
        .with_dotfile("2-locked", "2")
        .with_home_file("2-locked", "old")
        .build();
    common::chmod(&ctx.home_path("2-locked"), 0o400);

    let log = RecordingLog::new();
    let err = Commands::new(&log, Palette::plain())
        .apply_path(ctx.dotfiles(), &ctx.roots)
        .unwrap_err();

    let children = err.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].to_string(), "error applying directory");
    assert_eq!(
        children[1].children()[0].to_string(),
        format!(
            "error applying {} to {}",
            ctx.dotfiles_path("2-locked").display(),
            ctx.home_path("2-locked").display()
        )
    );
    assert_eq!(log.messages(Level::Plain, true), vec![" ✓", " ✕"]);
    assert_eq!(IntegrationTestContext::read(&ctx.home_path("1-ok")), "1");
}

#[test]
fn directory_in_the_way_fails_only_that_file() {
    let ctx = TestContextBuilder::new()
        .with_dotfile("a", "a")
        .with_dotfile("b", "b")
        .with_dotfile("c", "c")
        .with_home_file("b/inner", "occupied")
        .build();

    let log = RecordingLog::new();
    let err = Commands::new(&log, Palette::plain())
        .apply_path(ctx.dotfiles(), &ctx.roots)
        .unwrap_err();

    let children = err.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].to_string(), "error applying directory");
    assert_eq!(
        children[1].children()[0].to_string(),
        format!(
            "error applying {} to {}",
            ctx.dotfiles_path("b").display(),
            ctx.home_path("b").display()
        )
    );
    assert_eq!(log.count(Level::Plain, false), 3);
    assert_eq!(log.messages(Level::Plain, true), vec![" ✓", " ✕", " ✓"]);
    assert_eq!(IntegrationTestContext::read(&ctx.home_path("a")), "a");
    assert_eq!(IntegrationTestContext::read(&ctx.home_path("c")), "c");
    assert!(ctx.home_path("b").is_dir());
}

#[test]
fn single_file_onto_directory_is_wrapped() {
    let ctx = TestContextBuilder::new()
        .with_dotfile(".vim", "not a directory")
        .with_home_file(".vim/vimrc", "x")
        .build();
    let from = ctx.dotfiles_path(".vim");
    let to = ctx.home_path(".vim");

    let log = RecordingLog::new();
    let err = Commands::new(&log, Palette::plain())
        .apply_path(&from, &ctx.roots)
        .unwrap_err();

    let children = err.children();
    assert_eq!(children.len(), 2);
    assert_eq!(
        children[0].to_string(),
        format!("error applying {} to {}", from.display(), to.display())
    );
    assert_eq!(log.messages(Level::Plain, true), vec![" ✕"]);
}
