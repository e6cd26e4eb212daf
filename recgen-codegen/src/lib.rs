//! Code model, emission engine and lowering for recgen.
//!
//! # Module Organization
//!
//! - [`builder`] - The emission engine ([`builder::Emitter`]) and the [`builder::Render`] capability
//! - [`model`] - Code-model nodes for C#-shaped declarations
//! - [`lower`] - Expansion of a record description into a class declaration
//! - [`pattern`] - The code patterns a batch can be generated with
//! - [`dispatch`] - Batch processing of candidates into named artifacts

pub mod builder;
pub mod dispatch;
pub mod lower;
pub mod model;
pub mod pattern;

mod config;
mod diagnostic;
mod error;

pub use config::GeneratorConfig;
pub use diagnostic::{Diagnostic, Severity};
pub use dispatch::{Artifact, BatchOutput, CandidateFailure, Dispatcher};
pub use error::LowerError;
pub use lower::{lower, lower_constructor};
pub use pattern::Pattern;
