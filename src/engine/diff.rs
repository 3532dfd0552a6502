//! Unified line diffs and their classification for display.
use similar::{ChangeTag, TextDiff};

use crate::logging::{Color, Palette};

const CONTEXT_RADIUS: usize = 3;
const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Unified diff of `a` against `b`, labelled `label_a` and `label_b`.
///
/// Returns an empty string exactly when the bytes are identical. Otherwise
/// the text starts with `--- label_a` and `+++ label_b` headers followed by
/// `@@` hunks with three lines of context. Lines of `a` missing from `b` are
/// prefixed `-`, lines of `b` missing from `a` are prefixed `+`, and a last
/// line lacking its newline is followed by `\ No newline at end of file`.
/// Lines are compared as bytes and decoded lossily for display only.
#[must_use]
pub fn unified(label_a: &str, label_b: &str, a: &[u8], b: &[u8]) -> String {
    if a == b {
        return String::new();
    }

    let diff = TextDiff::from_lines(a, b);
    let mut lines = vec![format!("--- {label_a}"), format!("+++ {label_b}")];
    for hunk in diff.unified_diff().context_radius(CONTEXT_RADIUS).iter_hunks() {
        lines.push(hunk.header().to_string());
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            let value = change.value();
            match value.strip_suffix(b"\n") {
                Some(line) => lines.push(format!("{sign}{}", String::from_utf8_lossy(line))),
                None => {
                    lines.push(format!("{sign}{}", String::from_utf8_lossy(value)));
                    lines.push(NO_NEWLINE_MARKER.to_string());
                }
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Role of one line of unified diff output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `@@ -i,j +k,l @@`
    HunkHeader,
    /// Line present only in the second input.
    Addition,
    /// Line present only in the first input.
    Deletion,
    /// File headers, unchanged lines and markers.
    Context,
}

impl LineKind {
    /// Color the line is displayed in, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::HunkHeader => Some(Color::Cyan),
            Self::Addition => Some(Color::Green),
            Self::Deletion => Some(Color::Red),
            Self::Context => None,
        }
    }
}

/// Classify one line of [`unified`] output.
///
/// `---` and `+++` file headers are [`LineKind::Context`].
#[must_use]
pub fn classify(line: &str) -> LineKind {
    if line.len() > 2 && line.starts_with("@@") && line.ends_with("@@") {
        LineKind::HunkHeader
    } else if line.starts_with('+') && !line.starts_with("++") {
        LineKind::Addition
    } else if line.starts_with('-') && !line.starts_with("--") {
        LineKind::Deletion
    } else {
        LineKind::Context
    }
}

/// `line` painted according to its [`LineKind`].
#[must_use]
pub fn paint_line(palette: Palette, line: &str) -> String {
    classify(line)
        .color()
        .map_or_else(|| line.to_string(), |color| palette.paint(color, line))
}
