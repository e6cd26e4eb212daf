//! Errors reported while lowering a record description.

use thiserror::Error;

/// A record description the lowering pass refuses to expand.
///
/// These are detected before any tree is built and are reported per
/// candidate; they never abort a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    #[error("record type name cannot be empty")]
    EmptyTypeName,

    #[error("field #{index} of '{record}' has an empty name")]
    EmptyFieldName { record: String, index: usize },

    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidIdentifier {
        kind: &'static str,
        name: String,
        reason: &'static str,
    },

    #[error("'{name}' is a reserved keyword and cannot be used as a {kind} name")]
    ReservedKeyword { kind: &'static str, name: String },

    #[error("field '{field}' of '{record}' has an empty type")]
    EmptyFieldType { record: String, field: String },

    #[error("duplicate field '{field}' in '{record}'")]
    DuplicateField { record: String, field: String },

    #[error("'{name}' in '{record}' collides with a generated member")]
    MemberConflict { record: String, name: String },

    #[error("two fields of '{record}' map to the constructor parameter '{parameter}'")]
    DuplicateParameter { record: String, parameter: String },
}

impl LowerError {
    /// Short machine-readable code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyTypeName | Self::EmptyFieldName { .. } => "empty_name",
            Self::EmptyFieldType { .. } => "empty_type",
            Self::InvalidIdentifier { .. } => "invalid_identifier",
            Self::ReservedKeyword { .. } => "reserved_keyword",
            Self::DuplicateField { .. } => "duplicate_field",
            Self::DuplicateParameter { .. } => "duplicate_parameter",
            Self::MemberConflict { .. } => "member_conflict",
        }
    }
}
