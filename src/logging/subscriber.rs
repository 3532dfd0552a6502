//! Tracing subscriber setup: console formatter, file layer, and initialisation.
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use super::utils::{format_utc_datetime, format_utc_time, log_file_path, strip_ansi};

/// Target of events that leave the current line open.
pub(super) const PARTIAL_TARGET: &str = "dots::partial";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Open log file plus the text of a line that has not been terminated yet.
#[derive(Debug)]
struct FileState {
    file: fs::File,
    pending: String,
}

/// A [`tracing_subscriber::Layer`] that appends every completed line to the
/// persistent log file with a timestamp and ANSI codes stripped.
///
/// Events targeted at [`PARTIAL_TARGET`] are held back and prepended to the
/// next line-ending event, so `Applying a to b ...` and its ` ✓` land on the
/// same line in the file just like on the console.
#[derive(Debug)]
pub(super) struct FileLayer {
    state: Mutex<FileState>,
}

impl FileLayer {
    /// Truncate `path`, write a run header, and return a layer appending to it.
    ///
    /// Returns `None` if the file cannot be written.
    pub(super) fn create(path: &Path) -> Option<Self> {
        let version =
            option_env!("DOTS_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let header = format!(
            "==========================================\n\
             dots {version} {}\n\
             ==========================================\n",
            format_utc_datetime(),
        );
        fs::write(path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(path).ok()?;
        Some(Self {
            state: Mutex::new(FileState {
                file,
                pending: String::new(),
            }),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = strip_ansi(&extractor.message);

        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if event.metadata().target() == PARTIAL_TARGET {
            state.pending.push_str(&msg);
            return;
        }
        let line = std::mem::take(&mut state.pending) + &msg;
        let ts = format_utc_time();
        writeln!(state.file, "[{ts}] {line}").ok();
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that prints the message as-is.
///
/// The [`Logger`](super::logger::Logger) has already applied the level tag and
/// colors; the formatter only decides whether the line is terminated.
struct DotsFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for DotsFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        if event.metadata().target() == PARTIAL_TARGET {
            write!(writer, "{msg}")
        } else {
            writeln!(writer, "{msg}")
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Everything goes to stdout so a progress message and its outcome mark stay
/// on one line regardless of severity. Debug events reach the console only
/// when `verbose` is set; the file under `$XDG_CACHE_HOME/dots/<command>.log`
/// always receives them. Must be called once at program startup.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let console_layer = fmt::layer()
        .event_format(DotsFormatter)
        .with_writer(std::io::stdout)
        .with_filter(console_level);

    let file_layer = log_file_path(command)
        .and_then(|path| FileLayer::create(&path))
        .map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
