//! Core utilities and types for the recgen generator.
//!
//! This crate provides the identifier rules shared by the manifest parser and
//! the lowering algorithm, and the file writer used to persist artifacts.

mod file;
mod ident;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Identifier rules
pub use ident::{
    CSHARP_KEYWORDS, escape_keyword, is_csharp_keyword, parameter_name, validate_identifier,
};
