//! Candidate descriptions supplied by the discovery step.

use serde::{Deserialize, Serialize};

use crate::RecordDescription;

/// A candidate type together with the compilation-unit context it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The record to lower.
    pub record: RecordDescription,
    /// Enclosing namespace, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Using directives to emit ahead of the generated type.
    #[serde(default)]
    pub usings: Vec<String>,
}

impl Candidate {
    /// Create a candidate with no namespace and no usings.
    pub fn new(record: RecordDescription) -> Self {
        Self {
            record,
            namespace: None,
            usings: Vec::new(),
        }
    }

    /// Set the enclosing namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a using directive.
    pub fn using(mut self, using: impl Into<String>) -> Self {
        self.usings.push(using.into());
        self
    }

    /// Add multiple using directives.
    pub fn usings(mut self, usings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.usings.extend(usings.into_iter().map(Into::into));
        self
    }

    /// The candidate's type name.
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

impl From<RecordDescription> for Candidate {
    fn from(record: RecordDescription) -> Self {
        Self::new(record)
    }
}
