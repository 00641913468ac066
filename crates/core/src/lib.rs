//! indenticator - Indent scope detection for editor guides
//!
//! This crate provides functionality to:
//! - Derive the indentation depth of a selection from leading whitespace
//! - Find the outer and inner indent scopes enclosing the selection
//! - Build short peek previews of the lines bounding a scope
//!
//! The host editor passes document snapshots, selections and settings in
//! explicitly; nothing here holds on to editor state between calls.
pub mod config;
pub mod document;
pub mod error;
pub mod indent;
pub mod interfaces;
pub mod peek;
pub mod scope;
pub mod spy;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{Config, EffectiveConfig};
pub use document::{Document, Line};
pub use indent::{IndentUnit, depth_of, line_depth, selection_depth};
pub use interfaces::TextDocument;
pub use peek::{PeekConfig, ScopePeekBuilder};
pub use scope::{ActiveScopes, FinderOptions, ScopeRangeFinder};
pub use spy::{IndentSpy, Recomputation, ScopeHover, ScopeReport, StatusText};
