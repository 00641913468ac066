//! Scope peek previews
//!
//! A preview shows the lines right before a scope's header and after its
//! footer, with a single placeholder line standing in for the scope body:
//!
//! ```text
//! foo();
//! if(foo()) {
//!   ...
//! }
//! ```

use crate::{
    indent::{IndentUnit, line_depth},
    interfaces::TextDocument,
    types::IndentScope,
};
use serde::{Deserialize, Serialize};

/// How much context a preview shows around a scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeekConfig {
    /// Lines to show ending at the scope's first line, 0 disables
    pub lines_before: usize,
    /// Lines to show starting at the scope's last line, 0 disables
    pub lines_after: usize,
    /// Lines shorter than this (after trimming) are dropped at the outer
    /// edge of the window
    pub min_trimmed_length: usize,
    pub placeholder: String,
}

/// Assembles preview text for one scope
pub struct ScopePeekBuilder<'a> {
    config: &'a PeekConfig,
    unit: IndentUnit,
}

impl<'a> ScopePeekBuilder<'a> {
    pub fn new(config: &'a PeekConfig, unit: IndentUnit) -> Self {
        Self { config, unit }
    }

    /// Lines leading up to and including the scope's first line, top to bottom.
    pub fn peek_back<D: TextDocument + ?Sized>(
        &self,
        document: &D,
        scope: &IndentScope,
        ref_depth: usize,
    ) -> Vec<String> {
        if self.config.lines_before == 0 || document.line_count() == 0 {
            return Vec::new();
        }
        let last = scope.first_line.min(document.last_line());
        let first = last.saturating_sub(self.config.lines_before - 1);
        self.collect(document, first..=last, ref_depth)
    }

    /// Lines starting at the scope's last line, top to bottom.
    ///
    /// The window is scanned bottom-up so that short trailing lines are the
    /// ones that get dropped.
    pub fn peek_forward<D: TextDocument + ?Sized>(
        &self,
        document: &D,
        scope: &IndentScope,
        ref_depth: usize,
    ) -> Vec<String> {
        if self.config.lines_after == 0 || document.line_count() == 0 {
            return Vec::new();
        }
        let first = scope.last_line.min(document.last_line());
        let last = first
            .saturating_add(self.config.lines_after - 1)
            .min(document.last_line());
        let mut lines = self.collect(document, (first..=last).rev(), ref_depth);
        lines.reverse();
        lines
    }

    /// One indentation unit followed by the configured placeholder text.
    pub fn placeholder(&self) -> String {
        format!("{}{}", self.unit.unit(), self.config.placeholder)
    }

    /// Full preview for `scope`, or `None` when neither side has any line.
    pub fn build_preview<D: TextDocument + ?Sized>(
        &self,
        document: &D,
        scope: &IndentScope,
    ) -> Option<String> {
        if document.line_count() == 0 {
            return None;
        }
        let header = scope.first_line.min(document.last_line());
        let ref_depth = line_depth(document, header, self.unit.width());

        let back = self.peek_back(document, scope, ref_depth);
        let forward = self.peek_forward(document, scope, ref_depth);
        if back.is_empty() && forward.is_empty() {
            return None;
        }

        let mut lines = back;
        lines.push(self.placeholder());
        lines.extend(forward);
        Some(lines.join("\n"))
    }

    /// Walk `lines` in order, keeping the trailing run that matches `ref_depth`.
    ///
    /// Short lines are skipped until the first line is kept. A depth mismatch
    /// throws away everything kept so far, but short lines are not skipped
    /// anymore after that.
    fn collect<D, I>(&self, document: &D, lines: I, ref_depth: usize) -> Vec<String>
    where
        D: TextDocument + ?Sized,
        I: Iterator<Item = usize>,
    {
        let mut peeked = Vec::new();
        let mut pushed_once = false;
        for line in lines {
            let text = document.line_text(line).trim();
            if !pushed_once && text.chars().count() < self.config.min_trimmed_length {
                continue;
            }
            if line_depth(document, line, self.unit.width()) != ref_depth {
                peeked.clear();
                continue;
            }
            peeked.push(text.to_string());
            pushed_once = true;
        }
        peeked
    }
}
