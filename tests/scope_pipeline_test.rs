//! End-to-end tests going from raw text to guides, hovers and status text

use anyhow::Result;
use indenticator_core::{
    Document, EffectiveConfig, IndentSpy, IndentUnit, Position, Selection, TextDocument,
};

const NESTED: &str = "() => {\n  if(foo()) {\n    bar();\n    bar();\n    return;\n  } else {\n    foo();\n  }\n}\n";

/// Host-side document that only lends its buffer
struct BorrowedLines<'a> {
    lines: Vec<&'a str>,
}

impl TextDocument for BorrowedLines<'_> {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> &str {
        self.lines[line]
    }
}

fn all_features() -> EffectiveConfig {
    let mut config = EffectiveConfig::default();
    config.inner.show = true;
    config.outer.hover_threshold = 1;
    config.inner.hover_threshold = 1;
    for highlight in [&mut config.outer, &mut config.inner] {
        highlight.peek.lines_after = 1;
        highlight.peek.min_trimmed_length = 0;
    }
    config
}

#[test]
fn test_function_body_scope() -> Result<()> {
    let spy = IndentSpy::new(all_features());
    let result = spy.recompute(
        &Document::from_text(NESTED),
        &Selection::caret(3, 2),
        IndentUnit::spaces(2)?,
    )?;

    assert_eq!(result.depth, Some(1));

    let outer = result.outer.scope.expect("outer scope");
    assert_eq!((outer.first_line, outer.last_line, outer.marker_column), (0, 8, 0));
    let outer_lines: Vec<usize> = result.outer.markers.iter().map(|m| m.line).collect();
    assert_eq!(outer_lines, (1..=7).collect::<Vec<_>>());

    let inner = result.inner.scope.expect("inner scope");
    assert_eq!((inner.first_line, inner.last_line, inner.marker_column), (1, 5, 2));
    assert_eq!(
        result.inner.markers,
        vec![Position::new(2, 2), Position::new(3, 2), Position::new(4, 2)]
    );

    assert_eq!(
        result.outer.hover.as_ref().map(|hover| hover.contents.as_str()),
        Some("() => {\n  ...\n}")
    );
    assert_eq!(
        result.inner.hover.as_ref().map(|hover| hover.contents.as_str()),
        Some("if(foo()) {\n  ...\n} else {")
    );
    assert_eq!(result.status.expect("status").text, "Indents: 1");
    Ok(())
}

#[test]
fn test_borrowed_document_matches_owned_document() -> Result<()> {
    let spy = IndentSpy::new(all_features());
    let borrowed = BorrowedLines {
        lines: NESTED.split('\n').collect(),
    };
    let owned = Document::from_text(NESTED);
    let unit = IndentUnit::spaces(2)?;

    for line in 0..owned.line_count() {
        let selection = Selection::caret(line, 3);
        assert_eq!(
            spy.recompute(&borrowed, &selection, unit)?,
            spy.recompute(&owned, &selection, unit)?,
            "line {line}"
        );
    }
    Ok(())
}

#[test]
fn test_tab_indented_document() -> Result<()> {
    let document = Document::from_text("fn main() {\n\tif x {\n\t\ty();\n\t}\n}");
    let spy = IndentSpy::new(all_features());
    let result = spy.recompute(&document, &Selection::caret(2, 2), IndentUnit::tabs(4)?)?;

    assert_eq!(result.depth, Some(2));
    let outer = result.outer.scope.expect("outer scope");
    assert_eq!((outer.first_line, outer.last_line, outer.marker_column), (1, 3, 1));
    assert_eq!(
        result.outer.hover.as_ref().map(|hover| hover.contents.as_str()),
        Some("if x {\n\t...\n}")
    );
    Ok(())
}

#[test]
fn test_top_level_selection() -> Result<()> {
    let document = Document::from_text(NESTED);
    let unit = IndentUnit::spaces(2)?;

    let result =
        IndentSpy::new(all_features()).recompute(&document, &Selection::caret(0, 0), unit)?;
    assert_eq!(result.depth, Some(0));
    assert!(result.outer.scope.is_none());
    assert!(result.outer.markers.is_empty());
    assert_eq!(result.inner.markers.len(), 7);

    let mut config = all_features();
    config.inner_at_top_level = false;
    let result = IndentSpy::new(config).recompute(&document, &Selection::caret(0, 0), unit)?;
    assert!(result.inner.scope.is_none());
    assert!(result.inner.markers.is_empty());
    Ok(())
}

#[test]
fn test_pipeline_is_idempotent() -> Result<()> {
    let spy = IndentSpy::new(all_features());
    let document = Document::from_text(NESTED);
    let selection = Selection::from_coords(2, 0, 6, 3);
    let unit = IndentUnit::spaces(2)?;

    let first = spy.recompute(&document, &selection, unit)?;
    let second = spy.recompute(&document, &selection, unit)?;
    assert_eq!(first, second);
    Ok(())
}
