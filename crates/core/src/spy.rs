//! Entry point that turns a document and selection into everything the host
//! renders: guide markers, hover previews and status text.

use crate::{
    config::{EffectiveConfig, HighlightConfig},
    error::{Error, Result},
    indent::{IndentUnit, selection_depth},
    interfaces::TextDocument,
    peek::ScopePeekBuilder,
    scope::{FinderOptions, ScopeRangeFinder},
    types::{IndentScope, Marker, Position, ScopeLevel, Selection},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hover preview offered along a scope's guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeHover {
    pub scope: IndentScope,
    pub contents: String,
}

impl ScopeHover {
    /// Preview to show when the pointer rests on `position`, if it is on the guide
    pub fn contents_at(&self, position: Position) -> Option<&str> {
        self.scope
            .is_on_guide(position)
            .then_some(self.contents.as_str())
    }
}

/// Result for one of the two scopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeReport {
    pub level: ScopeLevel,
    /// Guide markers to draw; empty when highlighting is off for this scope
    pub markers: Vec<Marker>,
    pub scope: Option<IndentScope>,
    pub hover: Option<ScopeHover>,
}

impl ScopeReport {
    pub fn empty(level: ScopeLevel) -> Self {
        Self {
            level,
            markers: Vec::new(),
            scope: None,
            hover: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusText {
    pub text: String,
    pub tooltip: String,
}

/// Everything derived from one document/selection pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recomputation {
    /// Selection depth, `None` when only blank lines are selected
    pub depth: Option<usize>,
    pub outer: ScopeReport,
    pub inner: ScopeReport,
    /// `None` when the status bar item should be hidden
    pub status: Option<StatusText>,
}

impl Recomputation {
    /// Nothing to show: no active document or selection
    pub fn inactive() -> Self {
        Self {
            depth: None,
            outer: ScopeReport::empty(ScopeLevel::Outer),
            inner: ScopeReport::empty(ScopeLevel::Inner),
            status: None,
        }
    }

    /// Hover preview for a pointer position, from whichever guide it rests on
    pub fn hover_at(&self, position: Position) -> Option<&str> {
        [&self.outer, &self.inner]
            .into_iter()
            .filter_map(|report| report.hover.as_ref())
            .find_map(|hover| hover.contents_at(position))
    }
}

/// Computes indent guides for the current selection.
///
/// Holds only the resolved configuration; every call is independent of the
/// previous one.
#[derive(Debug, Clone, Default)]
pub struct IndentSpy {
    config: EffectiveConfig,
}

impl IndentSpy {
    pub fn new(config: EffectiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// Replace the configuration, e.g. after the settings or the active
    /// document's language changed
    pub fn set_config(&mut self, config: EffectiveConfig) {
        self.config = config;
    }

    /// Like [`IndentSpy::recompute`], for hosts that may not have an active
    /// document or selection.
    pub fn recompute_active<D: TextDocument + ?Sized>(
        &self,
        document: Option<&D>,
        selection: Option<&Selection>,
        unit: IndentUnit,
    ) -> Result<Recomputation> {
        match (document, selection) {
            (Some(document), Some(selection)) => self.recompute(document, selection, unit),
            _ => Ok(Recomputation::inactive()),
        }
    }

    pub fn recompute<D: TextDocument + ?Sized>(
        &self,
        document: &D,
        selection: &Selection,
        unit: IndentUnit,
    ) -> Result<Recomputation> {
        unit.validate()?;
        if document.line_count() == 0 {
            return Err(Error::EmptyDocument);
        }

        let width = unit.width();
        let depth = selection_depth(document, selection, width);
        let mut outer = ScopeReport::empty(ScopeLevel::Outer);
        let mut inner = ScopeReport::empty(ScopeLevel::Inner);

        if let Some(depth) = depth {
            if self.config.outer.is_enabled() || self.config.inner.is_enabled() {
                let finder = ScopeRangeFinder::new(FinderOptions {
                    compute_inner: self.config.inner.is_enabled(),
                    inner_at_top_level: self.config.inner_at_top_level,
                });
                let scopes = finder.find(document, selection, depth, width);

                outer = self.report(
                    ScopeLevel::Outer,
                    &self.config.outer,
                    scopes.outer_markers,
                    scopes.outer,
                    document,
                    unit,
                );
                inner = self.report(
                    ScopeLevel::Inner,
                    &self.config.inner,
                    scopes.inner_markers,
                    scopes.inner,
                    document,
                    unit,
                );
            }
        }

        debug!(
            ?depth,
            outer_markers = outer.markers.len(),
            inner_markers = inner.markers.len(),
            outer_hover = outer.hover.is_some(),
            inner_hover = inner.hover.is_some(),
            "recomputed indent scopes"
        );

        Ok(Recomputation {
            depth,
            outer,
            inner,
            status: self.status_text(depth.unwrap_or(0)),
        })
    }

    fn report<D: TextDocument + ?Sized>(
        &self,
        level: ScopeLevel,
        config: &HighlightConfig,
        markers: Vec<Marker>,
        scope: Option<IndentScope>,
        document: &D,
        unit: IndentUnit,
    ) -> ScopeReport {
        let hover = scope.filter(|_| config.wants_hover(markers.len())).and_then(|scope| {
            ScopePeekBuilder::new(&config.peek, unit)
                .build_preview(document, &scope)
                .map(|contents| ScopeHover { scope, contents })
        });

        ScopeReport {
            level,
            markers: if config.show { markers } else { Vec::new() },
            scope,
            hover,
        }
    }

    fn status_text(&self, depth: usize) -> Option<StatusText> {
        let status_bar = &self.config.status_bar;
        if !status_bar.enabled {
            return None;
        }
        let depth = depth.to_string();
        Some(StatusText {
            text: status_bar.text.replace("{indent}", &depth),
            tooltip: status_bar.tooltip.replace("{indent}", &depth),
        })
    }
}
