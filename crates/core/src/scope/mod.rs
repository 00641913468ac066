//! Indent scope detection around a selection

pub mod finder;

pub use finder::{ActiveScopes, FinderOptions, ScopeRangeFinder};
