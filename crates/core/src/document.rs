//! Owned document snapshot
//!
//! Hosts that cannot lend their buffer through [`TextDocument`] directly can
//! copy it into a [`Document`]. Leading whitespace is measured once per line.

use crate::interfaces::{TextDocument, first_non_blank_column};
use serde::{Deserialize, Serialize};

/// A single line of a [`Document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    pub first_non_blank: usize,
    pub is_blank: bool,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let first_non_blank = first_non_blank_column(&text);
        let is_blank = text.trim().is_empty();
        Self {
            text,
            first_non_blank,
            is_blank,
        }
    }
}

/// Immutable line-indexed snapshot of a buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Split `text` into lines the way an editor does: `\n` separates lines,
    /// a trailing `\r` is dropped, and a final newline opens one more empty line.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| Line::new(line.strip_suffix('\r').unwrap_or(line)))
            .collect();
        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Line::new).collect(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }
}

impl TextDocument for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> &str {
        &self.lines[line].text
    }

    fn first_non_blank(&self, line: usize) -> usize {
        self.lines[line].first_non_blank
    }

    fn is_blank(&self, line: usize) -> bool {
        self.lines[line].is_blank
    }
}
