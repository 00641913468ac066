//! Settings layers as written in the settings file
//!
//! Every field is optional so that a layer can be applied on top of another
//! one. The global settings and each language-specific block share this shape.

use super::highlight::{BorderStyle, HoverTrigger};
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

/// Peek options of a hover
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peek_back: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peek_forward: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_lines_shorter_than: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peek_block_placeholder: Option<String>,
}

/// Options shared by the outer scope (top level keys) and the inner scope
/// (keys under `inner`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_hover: Option<HoverTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverLayer>,
}

/// One complete settings layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsLayer {
    #[serde(flatten)]
    pub outer: HighlightLayer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<HighlightLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_current_depth_in_status_bar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_at_top_level: Option<bool>,
}

/// Key of a language-specific block, e.g. `[python]` or `[javascript, typescript]`
#[derive(Debug, Clone)]
pub struct LanguageSelector<'a> {
    key: &'a str,
}

impl<'a> LanguageSelector<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { key }
    }

    /// Check if this key applies to `language_id`
    pub fn matches(&self, language_id: &str) -> Result<bool> {
        let pattern = Regex::new(&format!(
            r"^\[(.*,\s*)?{}(,.*)?\]$",
            regex::escape(language_id)
        ))?;
        Ok(pattern.is_match(self.key))
    }

    /// Number of languages named by the key. Keys naming fewer languages are
    /// more specific and take precedence.
    pub fn language_count(&self) -> usize {
        self.key
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(',')
            .filter(|language| !language.trim().is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        assert!(LanguageSelector::new("[python]").matches("python").unwrap());
        assert!(LanguageSelector::new("[yaml, python]").matches("python").unwrap());
        assert!(LanguageSelector::new("[python, yaml]").matches("python").unwrap());
        assert!(LanguageSelector::new("[json,python,yaml]").matches("python").unwrap());

        assert!(!LanguageSelector::new("[cython]").matches("python").unwrap());
        assert!(!LanguageSelector::new("[python]").matches("py").unwrap());
        assert!(!LanguageSelector::new("python").matches("python").unwrap());
    }

    #[test]
    fn test_selector_escapes_language_id() {
        assert!(LanguageSelector::new("[c++]").matches("c++").unwrap());
        assert!(!LanguageSelector::new("[cpp]").matches("c.p").unwrap());
    }

    #[test]
    fn test_language_count() {
        assert_eq!(LanguageSelector::new("[python]").language_count(), 1);
        assert_eq!(LanguageSelector::new("[javascript, typescript]").language_count(), 2);
    }

    #[test]
    fn test_layer_parses_nested_inner_block() {
        let layer: SettingsLayer = serde_json::from_str(
            r#"{
                "showHighlight": false,
                "style": "SOLID",
                "showHover": 3,
                "inner": { "showHighlight": true, "hover": { "peekForward": 2 } }
            }"#,
        )
        .unwrap();

        assert_eq!(layer.outer.show_highlight, Some(false));
        assert_eq!(layer.outer.style, Some(BorderStyle::Solid));
        assert_eq!(layer.outer.show_hover, Some(HoverTrigger::MinLines(3)));
        let inner = layer.inner.unwrap();
        assert_eq!(inner.show_highlight, Some(true));
        assert_eq!(inner.hover.unwrap().peek_forward, Some(2));
    }
}
