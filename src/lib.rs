//! indenticator - Indent scope guides and scope peek previews
//!
//! The engine lives in `indenticator-core`; this package re-exports it and
//! hosts the cross-crate integration tests.
pub use indenticator_core::*;
