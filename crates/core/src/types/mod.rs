pub mod position;
pub mod scope;
pub mod selection;

// Re-export commonly used types
pub use position::{Marker, Position};
pub use scope::{IndentScope, ScopeLevel};
pub use selection::Selection;
