//! Console logger that routes every message through [`tracing`].
use super::palette::{Color, Palette};
use super::subscriber::PARTIAL_TARGET;
use super::types::{Level, Log};

/// Implement [`Log`] by delegating each method to [`Logger::emit`] with the
/// matching level and line ending.
macro_rules! forward_log_methods {
    ($($method:ident => $level:ident, $newline:literal),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.emit(Level::$level, $newline, msg);
            }
        )+
    };
}

/// Console logger.
///
/// Prefixes tagged levels with `DBG: `, `INF: `, `WRN: ` or `ERR: ` and emits
/// the result as a [`tracing`] event. The subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber) prints it to stdout
/// and mirrors it to `$XDG_CACHE_HOME/dots/<command>.log`.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    palette: Palette,
}

impl Logger {
    /// Create a logger painting its level tags with `palette`.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render `msg` with the level tag for `level`, if it has one.
    #[must_use]
    pub fn render(&self, level: Level, msg: &str) -> String {
        let color = match level {
            Level::Debug => Color::Magenta,
            Level::Info => Color::Cyan,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
            Level::Plain => return msg.to_string(),
        };
        level.tag().map_or_else(
            || msg.to_string(),
            |tag| format!("{}{msg}", self.palette.paint(color, format!("{tag}: "))),
        )
    }

    fn emit(&self, level: Level, newline: bool, msg: &str) {
        let text = self.render(level, msg);
        match (level, newline) {
            (Level::Debug, true) => tracing::debug!("{text}"),
            (Level::Debug, false) => tracing::debug!(target: PARTIAL_TARGET, "{text}"),
            (Level::Info | Level::Plain, true) => tracing::info!("{text}"),
            (Level::Info | Level::Plain, false) => {
                tracing::info!(target: PARTIAL_TARGET, "{text}");
            }
            (Level::Warn, true) => tracing::warn!("{text}"),
            (Level::Warn, false) => tracing::warn!(target: PARTIAL_TARGET, "{text}"),
            (Level::Error, true) => tracing::error!("{text}"),
            (Level::Error, false) => tracing::error!(target: PARTIAL_TARGET, "{text}"),
        }
    }
}

impl Log for Logger {
    forward_log_methods! {
        debug => Debug, false,
        debugln => Debug, true,
        info => Info, false,
        infoln => Info, true,
        warn => Warn, false,
        warnln => Warn, true,
        error => Error, false,
        errorln => Error, true,
        log => Plain, false,
        logln => Plain, true,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::subscriber::FileLayer;
    use std::fs;
    use tracing_subscriber::layer::SubscriberExt as _;

    #[test]
    fn render_plain_palette() {
        let logger = Logger::new(Palette::plain());
        assert_eq!(logger.render(Level::Warn, "careful"), "WRN: careful");
        assert_eq!(logger.render(Level::Error, "boom"), "ERR: boom");
        assert_eq!(logger.render(Level::Plain, "just text"), "just text");
    }

    #[test]
    fn render_colored_tag_only() {
        let logger = Logger::new(Palette::new(true));
        assert_eq!(
            logger.render(Level::Info, "hello"),
            "\x1b[36mINF: \x1b[0mhello"
        );
        assert_eq!(
            logger.render(Level::Debug, "x"),
            "\x1b[35mDBG: \x1b[0mx"
        );
    }

    #[test]
    fn progress_and_mark_share_a_line_in_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apply.log");
        let layer = FileLayer::create(&path).expect("file layer");
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            let logger = Logger::new(Palette::new(true));
            logger.log("Applying /d/a to /h/a ...");
            logger.logln(" ✓");
            logger.warnln("something odd");
        });

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().skip(3).collect();
        assert_eq!(lines.len(), 2, "got {contents:?}");
        assert!(lines[0].ends_with("] Applying /d/a to /h/a ... ✓"));
        assert!(lines[1].ends_with("] WRN: something odd"));
    }
}
