//! Core utilities for the gogen Go code generator.
//!
//! This crate holds the pieces that do not depend on the node tree:
//! identifier sanitizing, package alias resolution, import classification
//! and writing rendered files to disk.

mod alias;
mod error;
mod file;
mod ident;

// Alias resolution
pub use alias::{base_segment, default_alias, is_std_import, is_version_marker, resolve_alias};
// Errors
pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Identifiers
pub use ident::{FALLBACK_IDENT, is_identifier, sanitize_identifier};
