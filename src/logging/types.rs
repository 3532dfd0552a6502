//! Core logging types: severity levels and the [`Log`] trait.

/// Severity of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Debug detail, hidden on the console unless verbose.
    Debug,
    /// Informational message.
    Info,
    /// Warning that does not fail the command.
    Warn,
    /// Error message.
    Error,
    /// Unprefixed output (progress lines, marks, diff text).
    Plain,
}

impl Level {
    /// Short tag printed in front of the message, if any.
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Debug => Some("DBG"),
            Self::Info => Some("INF"),
            Self::Warn => Some("WRN"),
            Self::Error => Some("ERR"),
            Self::Plain => None,
        }
    }
}

/// Abstraction over logging backends.
///
/// Each severity comes in two flavours: the bare method writes the message
/// and leaves the line open, the `ln` method terminates the line. Commands
/// use the pair to print a progress message first and the outcome mark once
/// the work is done.
///
/// [`Logger`](super::logger::Logger) writes to the console and the log file;
/// [`RecordingLog`](super::recording::RecordingLog) keeps every call in memory
/// so tests can assert on exact output.
#[cfg_attr(test, mockall::automock)]
pub trait Log {
    /// Write a debug message without ending the line.
    fn debug(&self, msg: &str);
    /// Write a debug message and end the line.
    fn debugln(&self, msg: &str);
    /// Write an informational message without ending the line.
    fn info(&self, msg: &str);
    /// Write an informational message and end the line.
    fn infoln(&self, msg: &str);
    /// Write a warning without ending the line.
    fn warn(&self, msg: &str);
    /// Write a warning and end the line.
    fn warnln(&self, msg: &str);
    /// Write an error without ending the line.
    fn error(&self, msg: &str);
    /// Write an error and end the line.
    fn errorln(&self, msg: &str);
    /// Write plain text without ending the line.
    fn log(&self, msg: &str);
    /// Write plain text and end the line.
    fn logln(&self, msg: &str);
}
