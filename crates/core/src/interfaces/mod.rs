//! Core interfaces between the scope engine and its host
//!
//! The host editor supplies documents through these traits; the engine never
//! reaches out to editor state on its own.

pub mod text_document;

pub use text_document::{TextDocument, first_non_blank_column};
