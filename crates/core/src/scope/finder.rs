use crate::{
    indent::line_depth,
    interfaces::TextDocument,
    types::{IndentScope, Marker, Position, Selection},
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Switches that control which scopes the finder resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderOptions {
    /// Resolve the inner scope as well as the outer one
    pub compute_inner: bool,
    /// Resolve the inner scope when the selection sits at depth 0, where no
    /// outer scope exists
    pub inner_at_top_level: bool,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            compute_inner: true,
            inner_at_top_level: true,
        }
    }
}

/// Scopes enclosing a selection together with their guide markers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveScopes {
    pub outer_markers: Vec<Marker>,
    pub inner_markers: Vec<Marker>,
    pub outer: Option<IndentScope>,
    pub inner: Option<IndentScope>,
}

/// Grows the outer and inner scopes around a selection.
///
/// One sweep walks upward from the selection start and a second one walks
/// downward from the line after it. Each scope stops independently at the
/// first non-blank line that fails its membership test; that line becomes
/// the scope boundary.
#[derive(Debug, Clone, Default)]
pub struct ScopeRangeFinder {
    options: FinderOptions,
}

impl ScopeRangeFinder {
    pub fn new(options: FinderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FinderOptions {
        self.options
    }

    pub fn find<D: TextDocument + ?Sized>(
        &self,
        document: &D,
        selection: &Selection,
        selected_depth: usize,
        width: usize,
    ) -> ActiveScopes {
        if document.line_count() == 0 {
            return ActiveScopes::default();
        }
        let last_line = document.last_line();
        let start_line = selection.start.line.min(last_line);
        let scan = Scan {
            document,
            selection,
            selected_depth,
            width,
            inner_column: selected_depth * width,
        };

        // depth 0 has no enclosing level to draw a guide for
        let outer_column = selected_depth.checked_sub(1).map(|depth| depth * width);
        let compute_inner = self.options.compute_inner
            && (selected_depth > 0 || self.options.inner_at_top_level);

        let mut outer = Sweep::new(outer_column.is_some(), 0);
        let mut inner = Sweep::new(compute_inner, 0);
        for line in (0..=start_line).rev() {
            if !outer.open && !inner.open {
                break;
            }
            inner.visit(line, scan.inner_column, scan.is_inner_member(line), document);
            outer.visit(line, outer_column.unwrap_or(0), scan.is_outer_member(line), document);
        }
        let (outer_first, mut outer_markers) = outer.finish();
        let (inner_first, mut inner_markers) = inner.finish();

        let mut outer = Sweep::new(outer_column.is_some(), last_line);
        let mut inner = Sweep::new(compute_inner, last_line);
        for line in start_line + 1..=last_line {
            if !outer.open && !inner.open {
                break;
            }
            inner.visit(line, scan.inner_column, scan.is_inner_member(line), document);
            outer.visit(line, outer_column.unwrap_or(0), scan.is_outer_member(line), document);
        }
        let (outer_last, forward_outer) = outer.finish();
        let (inner_last, forward_inner) = inner.finish();

        outer_markers.reverse();
        outer_markers.extend(forward_outer);
        inner_markers.reverse();
        inner_markers.extend(forward_inner);

        let outer = outer_column.map(|marker_column| IndentScope {
            first_line: outer_first,
            last_line: outer_last,
            marker_column,
            depth: selected_depth,
        });
        let inner = compute_inner.then(|| IndentScope {
            first_line: inner_first,
            last_line: inner_last,
            marker_column: scan.inner_column,
            depth: selected_depth + 1,
        });
        trace!(?outer, ?inner, "resolved scope boundaries");

        ActiveScopes {
            outer_markers,
            inner_markers,
            outer,
            inner,
        }
    }
}

struct Scan<'a, D: ?Sized> {
    document: &'a D,
    selection: &'a Selection,
    selected_depth: usize,
    width: usize,
    inner_column: usize,
}

impl<D: TextDocument + ?Sized> Scan<'_, D> {
    /// Selected lines always belong to the outer scope. Blank lines only do
    /// so at depth 1, where the whole file is the enclosing block.
    fn is_outer_member(&self, line: usize) -> bool {
        if self.selection.contains_line(line) {
            return true;
        }
        line_depth(self.document, line, self.width) >= self.selected_depth
            || (self.document.is_blank(line) && self.selected_depth == 1)
    }

    /// A blank line at exactly the selected depth joins the inner scope,
    /// unless the selection ends right on the inner guide of that line.
    fn is_inner_member(&self, line: usize) -> bool {
        let depth = line_depth(self.document, line, self.width);
        if depth > self.selected_depth {
            return true;
        }
        let ends_on_guide =
            self.selection.end == Position::new(line, self.inner_column);
        self.document.is_blank(line) && depth == self.selected_depth && !ends_on_guide
    }
}

/// Growth state of one scope in one direction
struct Sweep {
    open: bool,
    boundary: usize,
    markers: Vec<Marker>,
}

impl Sweep {
    fn new(open: bool, edge: usize) -> Self {
        Self {
            open,
            boundary: edge,
            markers: Vec::new(),
        }
    }

    fn visit<D: TextDocument + ?Sized>(
        &mut self,
        line: usize,
        column: usize,
        is_member: bool,
        document: &D,
    ) {
        if !self.open {
            return;
        }
        if is_member {
            self.markers.push(Position::new(line, column));
        } else if !document.is_blank(line) {
            self.open = false;
            self.boundary = line;
        }
    }

    fn finish(self) -> (usize, Vec<Marker>) {
        (self.boundary, self.markers)
    }
}
