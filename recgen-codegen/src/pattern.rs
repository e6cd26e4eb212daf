//! Code patterns a candidate can be expanded with.

use std::{fmt, str::FromStr};

use recgen_ir::RecordDescription;

use crate::{error::LowerError, lower, model::TypeDeclaration};

/// The code pattern a generator applies to every candidate in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    /// Value members plus a nested validating `Builder`.
    #[default]
    Builder,
    /// A constructor assigning every field from a camel-cased parameter.
    PrimaryConstructor,
}

impl Pattern {
    /// Returns the pattern identifier as used in `recgen.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Builder => "builder",
            Pattern::PrimaryConstructor => "primary_constructor",
        }
    }

    /// Marker name that tags candidates for this pattern.
    pub fn default_marker(&self) -> &'static str {
        match self {
            Pattern::Builder => "BuilderPattern",
            Pattern::PrimaryConstructor => "PrimaryConstructor",
        }
    }

    /// Suffix of generated artifact names, e.g. `Person.Builder`.
    pub fn artifact_suffix(&self) -> &'static str {
        match self {
            Pattern::Builder => lower::BUILDER_TYPE,
            Pattern::PrimaryConstructor => "PrimaryConstructor",
        }
    }

    /// Expand a record description with this pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`LowerError`] if the description is malformed.
    pub fn lower(&self, record: &RecordDescription) -> Result<TypeDeclaration, LowerError> {
        match self {
            Pattern::Builder => lower::lower(record),
            Pattern::PrimaryConstructor => lower::lower_constructor(record),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builder" => Ok(Pattern::Builder),
            "primary_constructor" | "constructor" => Ok(Pattern::PrimaryConstructor),
            _ => Err(format!(
                "unknown pattern '{s}', expected 'builder' or 'primary_constructor'"
            )),
        }
    }
}
