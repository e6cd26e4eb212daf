//! Input data model for the recgen generator.
//!
//! This crate provides the types handed to the generator by whatever step
//! discovered the candidate types. They are deliberately plain data: the
//! generator never needs to know how a candidate was found.
//!
//! # Architecture
//!
//! ```text
//! recgen.toml → recgen-manifest (parsing) → recgen-ir (candidates) → codegen
//! ```

mod candidate;
mod record;

pub use candidate::Candidate;
pub use record::{RecordDescription, RecordField};
