//! Bounded card preview built from segmented token text.

use crate::text::segment;
use tracing::debug;

/// Maximum number of display lines a card can hold.
pub const MAX_LINES: usize = 30;

/// Separator placed between display lines in the deployable `tokenText`.
///
/// The backend expects the escaped two-character sequence, not a raw newline.
pub const DEPLOY_LINE_SEPARATOR: &str = "\\n";

/// Ordered display lines currently shown on the card.
///
/// Invariant: at most [`MAX_LINES`] lines, each at most
/// [`LINE_WIDTH`](crate::text::LINE_WIDTH) characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    lines: Vec<String>,
}

impl Preview {
    /// Build a preview from raw text, or `None` when it would exceed the cap.
    pub fn from_text(text: &str) -> Option<Self> {
        let lines = segment(text);
        if lines.len() > MAX_LINES {
            return None;
        }
        Some(Self { lines })
    }

    /// Replace the preview with `text` if it fits; returns whether it did.
    ///
    /// A rejected update leaves the current lines untouched.
    pub fn update(&mut self, text: &str) -> bool {
        match Self::from_text(text) {
            Some(next) => {
                debug!(lines = next.lines.len(), "preview replaced");
                *self = next;
                true
            }
            None => {
                debug!(max = MAX_LINES, "preview update rejected: too many lines");
                false
            }
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Canonical text submitted to the backend as `tokenText`.
    pub fn joined(&self) -> String {
        self.lines.join(DEPLOY_LINE_SEPARATOR)
    }
}

/// Number of display lines `text` would occupy, ignoring the cap.
pub fn line_count(text: &str) -> usize {
    segment(text).len()
}
