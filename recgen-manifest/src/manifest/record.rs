use recgen_ir::{Candidate, RecordDescription, RecordField};
use serde::Deserialize;

use super::{GeneratorSection, ParseContext};
use crate::Result;

/// One `[[records]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordEntry {
    /// Type name of the record.
    pub name: String,

    /// Overrides `generator.namespace`.
    pub namespace: Option<String>,

    /// Overrides `generator.usings`.
    pub usings: Option<Vec<String>>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<RecordField>,
}

impl RecordEntry {
    /// The record description, fields in manifest order.
    pub fn description(&self) -> RecordDescription {
        RecordDescription::new(&self.name).fields(self.fields.iter().cloned())
    }

    /// The candidate for this record, falling back to generator defaults.
    pub fn candidate(&self, generator: &GeneratorSection) -> Candidate {
        let usings = self.usings.as_ref().unwrap_or(&generator.usings);
        let candidate = Candidate::new(self.description()).usings(usings);
        match self.namespace.as_ref().or(generator.namespace.as_ref()) {
            Some(namespace) => candidate.namespace(namespace),
            None => candidate,
        }
    }

    /// Check the namespace and using directives. Record and field names are
    /// checked per record when the batch is lowered, so one malformed record
    /// never stops the others from generating.
    pub(crate) fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        let record_ctx = ctx.push(&self.name);
        if let Some(namespace) = &self.namespace {
            record_ctx.validate_dotted("namespace", namespace, "namespace")?;
        }
        for using in self.usings.iter().flatten() {
            record_ctx.validate_dotted("usings", using, "using")?;
        }
        Ok(())
    }
}
