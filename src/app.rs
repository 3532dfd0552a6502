//! Application flow: displays first, then the selected command.
use std::path::Path;

use crate::cli::{Cli, Command};
use crate::commands::{Commands, Operations};
use crate::config::Roots;
use crate::displays;
use crate::error::ErrorTree;
use crate::logging::{Log, Palette};

/// Run the invocation described by `cli`.
///
/// `--help`, `--printEnv` and `--version` are honoured in that order and
/// short-circuit the command. Only `--printEnv` and the commands need the
/// roots, so help and version work on a machine without a dotfiles
/// directory.
///
/// Returns `Ok(true)` on success and `Ok(false)` when the command found
/// differences or was not recognized.
///
/// # Errors
///
/// Returns an error if the roots cannot be resolved or the command failed.
pub fn run(cli: &Cli, log: &dyn Log, palette: Palette) -> Result<bool, ErrorTree> {
    if cli.help {
        log.logln(&displays::help(palette));
        return Ok(true);
    }

    if cli.print_env {
        let roots = resolve_roots(cli)?;
        log.logln(&displays::environment(palette, &roots));
        return Ok(true);
    }

    if cli.version {
        log.logln(&displays::version());
        return Ok(true);
    }

    let roots = resolve_roots(cli)?;
    log.debugln(&format!(
        "home: {}, dotfiles: {}",
        roots.home.display(),
        roots.dotfiles.display()
    ));
    let commands = Commands::new(log, palette);
    dispatch(cli.command.as_ref(), &roots, &commands, log, palette)
}

fn resolve_roots(cli: &Cli) -> Result<Roots, ErrorTree> {
    Roots::resolve(cli.dotfiles_files_dir.as_deref()).map_err(ErrorTree::from)
}

/// Run `command` against `roots` through `ops`.
///
/// `apply` and `adopt` default to the dotfiles root when no path is given.
/// A missing or unknown command prints the help display followed by a
/// `Command <name> not found` warning and yields `Ok(false)`.
///
/// # Errors
///
/// Propagates the error of the dispatched operation.
pub fn dispatch(
    command: Option<&Command>,
    roots: &Roots,
    ops: &dyn Operations,
    log: &dyn Log,
    palette: Palette,
) -> Result<bool, ErrorTree> {
    match command {
        Some(Command::Diff) => ops.diff(&roots.dotfiles, &roots.home),
        Some(Command::Apply { path }) => ops
            .apply(target(path.as_deref(), roots), roots)
            .map(|()| true),
        Some(Command::Adopt { path }) => ops
            .adopt(target(path.as_deref(), roots), roots)
            .map(|()| true),
        Some(other @ Command::External(_)) => Ok(not_found(other.name(), log, palette)),
        None => Ok(not_found("", log, palette)),
    }
}

fn target<'a>(path: Option<&'a Path>, roots: &'a Roots) -> &'a Path {
    path.unwrap_or(&roots.dotfiles)
}

fn not_found(name: &str, log: &dyn Log, palette: Palette) -> bool {
    log.logln(&displays::help(palette));
    log.warnln(&format!("Command {} not found", palette.magenta(name)));
    false
}
