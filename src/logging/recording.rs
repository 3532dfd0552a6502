//! In-memory [`Log`] implementation for asserting on command output.
use std::cell::RefCell;

use super::types::{Level, Log};

/// One recorded call on a [`RecordingLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Severity of the call.
    pub level: Level,
    /// Whether the call ended the line.
    pub newline: bool,
    /// The message exactly as passed.
    pub msg: String,
}

/// Implement [`Log`] by pushing an [`Entry`] for every call.
macro_rules! record_log_methods {
    ($($method:ident => $level:ident, $newline:literal),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.entries.borrow_mut().push(Entry {
                    level: Level::$level,
                    newline: $newline,
                    msg: msg.to_string(),
                });
            }
        )+
    };
}

/// Logger that keeps every call in memory, in order.
///
/// Used by tests to check which messages a command produced and how many
/// times each method was called.
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: RefCell<Vec<Entry>>,
}

impl RecordingLog {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    /// Messages of calls matching `level` and `newline`, oldest first.
    #[must_use]
    pub fn messages(&self, level: Level, newline: bool) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level && e.newline == newline)
            .map(|e| e.msg.clone())
            .collect()
    }

    /// Number of calls matching `level` and `newline`.
    #[must_use]
    pub fn count(&self, level: Level, newline: bool) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level && e.newline == newline)
            .count()
    }

    /// Whether nothing was logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Output as it would appear on the console, without level tags.
    #[must_use]
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for entry in self.entries.borrow().iter() {
            out.push_str(&entry.msg);
            if entry.newline {
                out.push('\n');
            }
        }
        out
    }
}

impl Log for RecordingLog {
    record_log_methods! {
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
