//! Parsing and validation of `recgen.toml` manifests.
//!
//! A manifest lists the records to generate builders for, together with
//! generator settings such as the marker name and default namespace.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{GeneratorSection, MANIFEST_FILE, Manifest, ParseContext, RecordEntry};
