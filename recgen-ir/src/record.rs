//! Record descriptions: the minimal shape the lowering algorithm consumes.

use serde::{Deserialize, Serialize};

/// A single field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordField {
    /// Field name (an identifier).
    pub name: String,
    /// Type reference, rendered verbatim.
    #[serde(rename = "type")]
    pub ty: String,
    /// The field may legitimately be absent, so no presence check is generated.
    #[serde(default)]
    pub optional: bool,
    /// Literal expression used as the builder-side default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl RecordField {
    /// Create a new required field without a default.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            default: None,
        }
    }

    /// Mark this field as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the default literal.
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    /// Returns true if the generated builder must check this field before building.
    pub fn is_required(&self) -> bool {
        !self.optional
    }
}

/// A named, ordered list of fields.
///
/// Field order is significant: it fixes constructor-parameter order,
/// builder-property order and the order of the rendered string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescription {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<RecordField>,
}

impl RecordDescription {
    /// Create an empty record description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn field(mut self, field: RecordField) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = RecordField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Fields that are subject to the presence check.
    pub fn required_fields(&self) -> impl Iterator<Item = &RecordField> {
        self.fields.iter().filter(|f| f.is_required())
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = RecordField::new("B", "string").default_value("\"B val\"");
        assert_eq!(field.name, "B");
        assert_eq!(field.ty, "string");
        assert!(field.is_required());
        assert_eq!(field.default.as_deref(), Some("\"B val\""));

        let opt = RecordField::new("A", "string?").optional();
        assert!(!opt.is_required());
    }

    #[test]
    fn test_required_fields_keep_order() {
        let record = RecordDescription::new("Person")
            .field(RecordField::new("FirstName", "string"))
            .field(RecordField::new("BirthDate", "DateTime?").optional())
            .field(RecordField::new("LastName", "string"));

        let required: Vec<_> = record.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(required, vec!["FirstName", "LastName"]);
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec!["FirstName", "BirthDate", "LastName"]
        );
    }

    #[test]
    fn test_deserialize_field_defaults() {
        let field: RecordField =
            serde_json::from_str(r#"{ "name": "Age", "type": "int?" }"#).unwrap();
        assert!(!field.optional);
        assert!(field.default.is_none());
        assert_eq!(field.ty, "int?");
    }
}
