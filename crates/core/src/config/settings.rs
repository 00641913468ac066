use super::{
    highlight::HighlightConfig,
    layer::{LanguageSelector, SettingsLayer},
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Settings as stored on disk: global options plus per-language blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(flatten)]
    pub settings: SettingsLayer,

    /// Blocks keyed by language selectors such as `[python, yaml]`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub language_specific: BTreeMap<String, SettingsLayer>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the settings that apply to a document of `language_id`.
    ///
    /// Defaults come first, then the global settings, then every matching
    /// language block. Blocks naming more languages are applied before blocks
    /// naming fewer, so `[python]` wins over `[python, yaml]`. Blocks of equal
    /// specificity are applied in key order.
    pub fn for_language(&self, language_id: Option<&str>) -> Result<EffectiveConfig> {
        let mut effective = EffectiveConfig::default();
        effective.apply(&self.settings);

        let Some(language_id) = language_id else {
            return Ok(effective);
        };

        let mut matching = Vec::new();
        for (key, layer) in &self.language_specific {
            let selector = LanguageSelector::new(key);
            if selector.matches(language_id)? {
                matching.push((selector.language_count(), key, layer));
            }
        }
        matching.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, key, layer) in matching {
            debug!("Applying language settings {key} for {language_id}");
            effective.apply(layer);
        }
        Ok(effective)
    }
}

/// Status bar text shown next to the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBarConfig {
    pub enabled: bool,
    /// `{indent}` is replaced with the current depth
    pub text: String,
    pub tooltip: String,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            text: "Indents: {indent}".to_string(),
            tooltip: "current indent depth: {indent}".to_string(),
        }
    }
}

/// Fully resolved settings for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    pub outer: HighlightConfig,
    pub inner: HighlightConfig,
    pub status_bar: StatusBarConfig,
    /// Resolve the inner scope for selections at depth 0
    pub inner_at_top_level: bool,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            outer: HighlightConfig::outer_default(),
            inner: HighlightConfig::inner_default(),
            status_bar: StatusBarConfig::default(),
            inner_at_top_level: true,
        }
    }
}

impl EffectiveConfig {
    /// Apply a settings layer on top of this config
    pub fn apply(&mut self, layer: &SettingsLayer) {
        self.outer.apply(&layer.outer);
        if let Some(inner) = &layer.inner {
            self.inner.apply(inner);
        }
        if let Some(enabled) = layer.show_current_depth_in_status_bar {
            self.status_bar.enabled = enabled;
        }
        if let Some(text) = &layer.status_text {
            self.status_bar.text = text.clone();
        }
        if let Some(tooltip) = &layer.status_tooltip {
            self.status_bar.tooltip = tooltip.clone();
        }
        if let Some(inner_at_top_level) = layer.inner_at_top_level {
            self.inner_at_top_level = inner_at_top_level;
        }
    }
}
