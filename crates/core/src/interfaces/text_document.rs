//! Text document interface
//!
//! The host owns the live buffer. Scope detection only needs a read-only,
//! line-indexed view of it, which is what this trait describes.

/// Read-only line access to a document snapshot.
///
/// Implementations must stay consistent for the duration of one
/// recomputation. Line indices passed in are always `< line_count()`.
pub trait TextDocument {
    /// Number of lines, at least 1 for any document an editor can show
    fn line_count(&self) -> usize;

    /// Raw text of a line without its line terminator
    fn line_text(&self, line: usize) -> &str;

    /// Character index of the first non-whitespace character, or the line's
    /// character length when the line is blank
    fn first_non_blank(&self, line: usize) -> usize {
        first_non_blank_column(self.line_text(line))
    }

    /// Whether the line is empty or whitespace only
    fn is_blank(&self, line: usize) -> bool {
        self.line_text(line).trim().is_empty()
    }

    /// Index of the last line
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }
}

/// Leading whitespace width of `text` in characters.
pub fn first_non_blank_column(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_blank_column() {
        assert_eq!(first_non_blank_column("    bar();"), 4);
        assert_eq!(first_non_blank_column("\t\tbar();"), 2);
        assert_eq!(first_non_blank_column("bar();"), 0);
        // blank lines report their full length
        assert_eq!(first_non_blank_column("   "), 3);
        assert_eq!(first_non_blank_column(""), 0);
    }
}
