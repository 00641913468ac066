//! Configuration management for indenticator

pub mod highlight;
pub mod layer;
mod settings;

// Re-export main types
pub use highlight::{BorderStyle, DecorationStyle, HighlightConfig, HoverTrigger};
pub use layer::{ColorLayer, HighlightLayer, HoverLayer, LanguageSelector, SettingsLayer};
pub use settings::{Config, EffectiveConfig, StatusBarConfig};
