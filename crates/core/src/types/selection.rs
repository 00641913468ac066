use serde::{Deserialize, Serialize};

use super::position::Position;

/// A cursor selection, always stored with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Build a selection from two positions in any order.
    pub fn new(anchor: Position, active: Position) -> Self {
        if anchor <= active {
            Self {
                start: anchor,
                end: active,
            }
        } else {
            Self {
                start: active,
                end: anchor,
            }
        }
    }

    /// Shorthand mirroring the editor constructor `(startLine, startChar, endLine, endChar)`.
    pub fn from_coords(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    /// An empty selection, i.e. a plain caret.
    pub fn caret(line: usize, character: usize) -> Self {
        let position = Position::new(line, character);
        Self {
            start: position,
            end: position,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Check if a line number is covered by this selection
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start.line && line <= self.end.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_normalized() {
        let selection = Selection::from_coords(4, 2, 1, 7);
        assert_eq!(selection.start, Position::new(1, 7));
        assert_eq!(selection.end, Position::new(4, 2));
        assert!(!selection.is_single_line());
    }

    #[test]
    fn test_caret_is_single_line() {
        let selection = Selection::caret(3, 5);
        assert!(selection.is_single_line());
        assert!(selection.contains_line(3));
        assert!(!selection.contains_line(4));
    }
}
