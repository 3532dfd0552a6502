//! ANSI color handling for console output.

/// Foreground colors used by the console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Failures and removed diff lines.
    Red,
    /// Success marks and added diff lines.
    Green,
    /// Warnings.
    Yellow,
    /// Paths.
    Blue,
    /// Command names and debug tags.
    Magenta,
    /// Hunk headers and info tags.
    Cyan,
}

impl Color {
    const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
        }
    }
}

/// Decides whether text gets wrapped in ANSI color codes.
///
/// Built once from the `--color` flag and handed to every component that
/// formats output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Create a palette; `enabled == false` yields plain text.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Wrap `text` in the escape codes for `color`.
    #[must_use]
    pub fn paint(self, color: Color, text: impl std::fmt::Display) -> String {
        if self.enabled {
            format!("{}{text}\x1b[0m", color.code())
        } else {
            text.to_string()
        }
    }

    /// Shorthand for [`Color::Red`].
    #[must_use]
    pub fn red(self, text: impl std::fmt::Display) -> String {
        self.paint(Color::Red, text)
    }

    /// Shorthand for [`Color::Green`].
    #[must_use]
    pub fn green(self, text: impl std::fmt::Display) -> String {
        self.paint(Color::Green, text)
    }

    /// Shorthand for [`Color::Blue`].
    #[must_use]
    pub fn blue(self, text: impl std::fmt::Display) -> String {
        self.paint(Color::Blue, text)
    }

    /// Shorthand for [`Color::Magenta`].
    #[must_use]
    pub fn magenta(self, text: impl std::fmt::Display) -> String {
        self.paint(Color::Magenta, text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
