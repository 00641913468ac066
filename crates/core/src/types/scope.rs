use serde::{Deserialize, Serialize};

use super::position::Position;

/// Which of the two highlighted scopes a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeLevel {
    /// Lines at the selection's depth or deeper
    Outer,
    /// Lines strictly deeper than the selection
    Inner,
}

/// A resolved indent scope.
///
/// `first_line` and `last_line` are the boundary lines, i.e. the non-blank
/// lines that stopped the scan in each direction (typically the block header
/// and its closing line). When a scan runs off the document they are clamped
/// to the first and last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndentScope {
    pub first_line: usize,
    pub last_line: usize,
    /// Column at which the guide for this scope is drawn
    pub marker_column: usize,
    pub depth: usize,
}

impl IndentScope {
    /// Check if a line number is within this scope, boundaries included
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.first_line && line <= self.last_line
    }

    /// Check if a position sits exactly on this scope's guide
    pub fn is_on_guide(&self, position: Position) -> bool {
        position.character == self.marker_column && self.contains_line(position.line)
    }

    /// Number of lines between the boundaries, boundaries included
    pub fn line_span(&self) -> usize {
        self.last_line - self.first_line + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_hit_requires_exact_column() {
        let scope = IndentScope {
            first_line: 4,
            last_line: 7,
            marker_column: 2,
            depth: 2,
        };

        assert!(scope.is_on_guide(Position::new(5, 2)));
        assert!(scope.is_on_guide(Position::new(4, 2)));
        assert!(scope.is_on_guide(Position::new(7, 2)));
        assert!(!scope.is_on_guide(Position::new(5, 1)));
        assert!(!scope.is_on_guide(Position::new(5, 3)));
        assert!(!scope.is_on_guide(Position::new(8, 2)));
        assert_eq!(scope.line_span(), 4);
    }
}
