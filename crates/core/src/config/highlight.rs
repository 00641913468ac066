//! Resolved settings for one highlighted scope

use super::layer::HighlightLayer;
use crate::impl_case_insensitive_deserialize;
use crate::peek::PeekConfig;
use serde::{Deserialize, Serialize};

/// CSS border style used for the guide line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    #[default]
    Inset,
    Outset,
    None,
}

impl_case_insensitive_deserialize!(
    BorderStyle,
    Solid => "solid",
    Dashed => "dashed",
    Dotted => "dotted",
    Double => "double",
    Groove => "groove",
    Ridge => "ridge",
    Inset => "inset",
    Outset => "outset",
    None => "none"
);

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::Groove => "groove",
            BorderStyle::Ridge => "ridge",
            BorderStyle::Inset => "inset",
            BorderStyle::Outset => "outset",
            BorderStyle::None => "none",
        }
    }
}

/// How the host should draw a guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationStyle {
    pub color_dark: String,
    pub color_light: String,
    pub border_style: BorderStyle,
    pub width: u32,
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self {
            color_dark: "#888".to_string(),
            color_light: "#999".to_string(),
            border_style: BorderStyle::Inset,
            width: 1,
        }
    }
}

impl DecorationStyle {
    /// Border width as a CSS length
    pub fn border_width(&self) -> String {
        format!("{}px", self.width)
    }
}

/// `showHover` accepts either a switch or a minimum number of guide lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoverTrigger {
    Enabled(bool),
    MinLines(i64),
}

impl HoverTrigger {
    /// Minimum number of guide markers before a hover is offered, 0 = never
    pub fn threshold(&self) -> usize {
        match *self {
            HoverTrigger::Enabled(enabled) => usize::from(enabled),
            HoverTrigger::MinLines(lines) => clamp_count(lines),
        }
    }
}

/// Negative counts in hand-written settings mean "off".
pub(crate) fn clamp_count(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Effective settings for the outer or the inner scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    /// Draw guide markers for this scope
    pub show: bool,
    pub style: DecorationStyle,
    /// See [`HoverTrigger::threshold`]
    pub hover_threshold: usize,
    pub peek: PeekConfig,
}

impl HighlightConfig {
    pub fn outer_default() -> Self {
        Self {
            show: true,
            style: DecorationStyle::default(),
            hover_threshold: 0,
            peek: PeekConfig {
                lines_before: 1,
                lines_after: 0,
                min_trimmed_length: 2,
                placeholder: "...".to_string(),
            },
        }
    }

    pub fn inner_default() -> Self {
        Self {
            show: false,
            ..Self::outer_default()
        }
    }

    /// Whether the scope has to be resolved at all
    pub fn is_enabled(&self) -> bool {
        self.show || self.hover_threshold > 0
    }

    /// Whether `marker_count` guide lines are enough to offer a hover
    pub fn wants_hover(&self, marker_count: usize) -> bool {
        self.hover_threshold > 0 && marker_count >= self.hover_threshold
    }

    /// Apply a settings layer on top of this one; fields the layer leaves
    /// unset keep their current value
    pub fn apply(&mut self, layer: &HighlightLayer) {
        if let Some(show) = layer.show_highlight {
            self.show = show;
        }
        if let Some(color) = &layer.color {
            if let Some(dark) = &color.dark {
                self.style.color_dark = dark.clone();
            }
            if let Some(light) = &color.light {
                self.style.color_light = light.clone();
            }
        }
        if let Some(border_style) = layer.style {
            self.style.border_style = border_style;
        }
        if let Some(width) = layer.width {
            self.style.width = width;
        }
        if let Some(trigger) = layer.show_hover {
            self.hover_threshold = trigger.threshold();
        }
        if let Some(hover) = &layer.hover {
            if let Some(peek_back) = hover.peek_back {
                self.peek.lines_before = clamp_count(peek_back);
            }
            if let Some(peek_forward) = hover.peek_forward {
                self.peek.lines_after = clamp_count(peek_forward);
            }
            if let Some(min_length) = hover.trim_lines_shorter_than {
                self.peek.min_trimmed_length = clamp_count(min_length);
            }
            if let Some(placeholder) = &hover.peek_block_placeholder {
                self.peek.placeholder = placeholder.clone();
            }
        }
    }
}
