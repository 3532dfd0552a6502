//! Help, environment and version displays.
use crate::config::{DOTFILES_DIR_ENV, Roots};
use crate::logging::{Color, Palette};

/// Version reported by `--version`, without the leading `v`.
#[must_use]
pub fn version_number() -> &'static str {
    let version = option_env!("DOTS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    version.strip_prefix('v').unwrap_or(version)
}

/// The `--version` display.
#[must_use]
pub fn version() -> String {
    format!("v{}", version_number())
}

/// The `--printEnv` display.
#[must_use]
pub fn environment(palette: Palette, roots: &Roots) -> String {
    format!(
        "-----------------------\n\
         Environment:\n\
         \n\
         HOME:               {}\n\
         DOTFILES FILES DIR: {}\n\
         -----------------------",
        palette.blue(roots.home.display()),
        palette.blue(roots.dotfiles.display()),
    )
}

/// The `--help` display.
#[must_use]
pub fn help(palette: Palette) -> String {
    let dots = palette.magenta("dots");
    let options = palette.green("[OPTIONS]");
    let command = palette.magenta("[COMMAND]");
    let args = palette.paint(Color::Yellow, "[ARGS]");
    let options_title = palette.green("Options");
    let command_title = palette.magenta("Command");
    let args_title = palette.paint(Color::Yellow, "Args");

    format!(
        "{dots}

Utility to manage your dotfiles, by keeping a given folder with a copy of the relevant dotfiles from user's home directory.
It allows you to adopt the dotfiles changes or override with local changes.

Usage: {dots} {options} {command} {args}

{options_title}:
  --help, -h                              Display this help menu

  --version                               Display version

  --dotfilesFilesDir <path>               Dotfiles files directory path to be used as the place where the ~/ will be mapped to.
                                          This directory should be version controlled in order to keep an history of the changes.
                                          It can also be controlled with \"{DOTFILES_DIR_ENV}\" env var, and takes precedence over the cmd flag.
                                          It defaults to \"~/.dotfiles/home\".

  --printEnv                              Prints homedir and dotfiles files dir values.

  --color <true/false>                    Colors output. Enabled by default.

  --verbose, -v                           Show debug output. It is always written to the log file.

{command_title}:
  diff                                    Diffs the user's dotfiles files with the ~/ files.

  adopt                                   Adopts changes from ~/ files to user's dotfiles files.
                                          A subpath of users home directory can be provided as an argument, in order to only adopt part of the directories/files.
                                          It can be a subdirectory or a file.
    {args_title}:
      path (optional)                     A path under the user's home directory to adopt from.

  apply                                   Apply changes from user's dotfiles files to ~/ files.
                                          A subpath of users dotfiles files directory can be provided as an argument, in order to only apply part of the directories/files.
                                          It can be a subdirectory or a file.
    {args_title}:
      path (optional)                     A path under the user's dotfiles files directory."
    )
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn version_has_single_v_prefix() {
        let v = version();
        assert!(v.starts_with('v'));
        assert!(!v.starts_with("vv"));
    }

    #[test]
    fn environment_lists_both_roots() {
        let roots = Roots {
            home: PathBuf::from("/home/u"),
            dotfiles: PathBuf::from("/home/u/.dotfiles/home"),
        };
        let text = environment(Palette::plain(), &roots);
        assert!(text.contains("HOME:               /home/u\n"));
        assert!(text.contains("DOTFILES FILES DIR: /home/u/.dotfiles/home\n"));
        assert!(text.starts_with("-----"));
        assert!(text.ends_with("-----"));
    }

    #[test]
    fn help_mentions_every_command_and_flag() {
        let text = help(Palette::plain());
        for needle in [
            "Usage: dots [OPTIONS] [COMMAND] [ARGS]",
            "--dotfilesFilesDir",
            "--printEnv",
            "--color",
            "--verbose",
            "  diff ",
            "  adopt ",
            "  apply ",
            DOTFILES_DIR_ENV,
        ] {
            assert!(text.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn help_is_colored_when_enabled() {
        assert!(help(Palette::new(true)).starts_with("\x1b[35mdots\x1b[0m"));
        assert!(help(Palette::plain()).starts_with("dots\n"));
    }
}
