//! `dots` binary entry point.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use clap::Parser;

use dots::app;
use dots::cli::{Cli, Command};
use dots::error::{ErrorTree, log_errors};
use dots::logging::{Log, Logger, Palette, init_subscriber};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let cli = Cli::parse();
    let palette = Palette::new(cli.color);
    init_subscriber(
        cli.verbose,
        cli.command.as_ref().map_or("dots", Command::log_name),
    );
    let log = Logger::new(palette);

    // Keep the default hook from printing the panic on stderr.
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| app::run(&cli, &log, palette)));

    match outcome {
        Ok(Ok(true)) => ExitCode::SUCCESS,
        Ok(Ok(false)) => ExitCode::FAILURE,
        Ok(Err(err)) => {
            log_errors(&log, &err);
            ExitCode::FAILURE
        }
        Err(payload) => {
            log.errorln("Recovered from panic");
            if let Some(msg) = panic_message(payload.as_ref()) {
                log_errors(&log, &ErrorTree::message(msg));
            }
            ExitCode::FAILURE
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}
