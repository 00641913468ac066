//! Indentation depth calculation
//!
//! Depth is derived from leading whitespace only: a line whose first
//! non-blank character sits at column `c` has depth `ceil(c / width)`.

use crate::{
    error::{Error, Result},
    interfaces::TextDocument,
    types::Selection,
};
use serde::{Deserialize, Serialize};

/// Indentation settings of the editor showing the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndentUnit {
    pub tab_size: usize,
    pub insert_spaces: bool,
}

impl IndentUnit {
    pub fn new(tab_size: usize, insert_spaces: bool) -> Result<Self> {
        let unit = Self {
            tab_size,
            insert_spaces,
        };
        unit.validate()?;
        Ok(unit)
    }

    pub fn spaces(tab_size: usize) -> Result<Self> {
        Self::new(tab_size, true)
    }

    pub fn tabs(tab_size: usize) -> Result<Self> {
        Self::new(tab_size, false)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tab_size == 0 {
            return Err(Error::InvalidTabSize(self.tab_size));
        }
        Ok(())
    }

    /// Columns per depth level. Literal tabs are not expanded, so every tab
    /// character counts as one level.
    pub fn width(&self) -> usize {
        if self.insert_spaces { self.tab_size } else { 1 }
    }

    /// Text of one indentation level
    pub fn unit(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size)
        } else {
            "\t".to_string()
        }
    }
}

/// Depth of a column, always rounding up.
pub fn depth_of(column: usize, width: usize) -> usize {
    column.div_ceil(width)
}

/// Depth of a line's first non-blank character.
pub fn line_depth<D: TextDocument + ?Sized>(document: &D, line: usize, width: usize) -> usize {
    depth_of(document.first_non_blank(line), width)
}

/// Effective depth of a selection.
///
/// For a single line the caret column counts when it sits left of the code,
/// otherwise the code's own indentation counts. Multi-line selections take
/// the shallowest non-blank line. `None` means every selected line is blank,
/// or the document has no lines at all.
pub fn selection_depth<D: TextDocument + ?Sized>(
    document: &D,
    selection: &Selection,
    width: usize,
) -> Option<usize> {
    if document.line_count() == 0 {
        return None;
    }
    let last_line = document.last_line();

    if selection.is_single_line() {
        let line = selection.start.line.min(last_line);
        let column = selection.start.character.min(document.first_non_blank(line));
        return Some(depth_of(column, width));
    }

    let first = selection.start.line.min(last_line);
    let last = selection.end.line.min(last_line);
    (first..=last)
        .filter(|&line| !document.is_blank(line))
        .map(|line| line_depth(document, line, width))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn fixture() -> Document {
        Document::from_text("() => {\n  if(foo()) {\n    bar();\n    return;\n  }\n}\n")
    }

    #[test]
    fn test_depth_of_divides() {
        assert_eq!(depth_of(12, 3), 4);
    }

    #[test]
    fn test_depth_of_always_rounds_up() {
        assert_eq!(depth_of(11, 5), 3);
        assert_eq!(depth_of(1, 3), 1);
        assert_eq!(depth_of(0, 4), 0);
    }

    #[test]
    fn test_line_depth_uses_leading_whitespace() {
        let document = Document::from_lines(["            test"]);
        assert_eq!(line_depth(&document, 0, 3), 4);
        assert_eq!(line_depth(&document, 0, 5), 3);
    }

    #[test]
    fn test_width_is_one_for_literal_tabs() {
        assert_eq!(IndentUnit::tabs(5).unwrap().width(), 1);
        assert_eq!(IndentUnit::spaces(5).unwrap().width(), 5);
    }

    #[test]
    fn test_zero_tab_size_is_rejected() {
        assert!(matches!(IndentUnit::spaces(0), Err(Error::InvalidTabSize(0))));
    }

    #[test]
    fn test_unit_text() {
        assert_eq!(IndentUnit::spaces(2).unwrap().unit(), "  ");
        assert_eq!(IndentUnit::tabs(3).unwrap().unit(), "\t");
    }

    #[test]
    fn test_caret_before_code_uses_caret_column() {
        let selection = Selection::from_coords(2, 1, 2, 2);
        assert_eq!(selection_depth(&fixture(), &selection, 2), Some(1));
    }

    #[test]
    fn test_caret_after_code_start_uses_code_column() {
        let selection = Selection::from_coords(2, 6, 2, 7);
        assert_eq!(selection_depth(&fixture(), &selection, 2), Some(2));
    }

    #[test]
    fn test_multi_line_takes_shallowest_line() {
        let selection = Selection::from_coords(1, 0, 2, 0);
        assert_eq!(selection_depth(&fixture(), &selection, 2), Some(1));
    }

    #[test]
    fn test_multi_line_skips_blank_lines() {
        let document = Document::from_lines(["x", "    a", "", "    b"]);
        let selection = Selection::from_coords(1, 0, 3, 1);
        assert_eq!(selection_depth(&document, &selection, 2), Some(2));
    }

    #[test]
    fn test_all_blank_selection_has_no_depth() {
        let document = Document::from_lines(["x", "", "   ", "y"]);
        let selection = Selection::from_coords(1, 0, 2, 0);
        assert_eq!(selection_depth(&document, &selection, 2), None);
    }

    #[test]
    fn test_line_past_end_clamps_to_last_line() {
        let document = Document::from_lines(["x", "    y"]);
        let selection = Selection::caret(10, 8);
        assert_eq!(selection_depth(&document, &selection, 2), Some(2));

        let selection = Selection::from_coords(1, 0, 10, 0);
        assert_eq!(selection_depth(&document, &selection, 2), Some(2));
    }

    #[test]
    fn test_empty_document_has_no_depth() {
        let document = Document::default();
        assert_eq!(selection_depth(&document, &Selection::caret(0, 0), 2), None);

        let document = Document::from_lines(Vec::<String>::new());
        let selection = Selection::from_coords(0, 0, 3, 1);
        assert_eq!(selection_depth(&document, &selection, 2), None);
    }
}
