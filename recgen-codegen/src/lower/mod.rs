//! Lowering: expand a record description into a class declaration.
//!
//! [`lower`] produces the builder-pattern class, containing in order:
//!
//! 1. the primary constructor (one parameter per field),
//! 2. `ToString`, rendering `Name { a = .., b = .. }`,
//! 3. `Equals(T other)`, a field-by-field value comparison,
//! 4. `Equals(object obj)`, delegating after a type check,
//! 5. a nested `Builder` type with a validating `Build`.
//!
//! [`lower_constructor`] produces a partial class holding only a constructor
//! that assigns every field from a camel-cased parameter.
//!
//! Lowering is a pure function of its input. The description is checked up
//! front, so the code model never sees an empty or duplicate name.

mod builder;
mod constructor;
mod record;

use indexmap::IndexSet;
use recgen_core::{is_csharp_keyword, parameter_name, validate_identifier};
use recgen_ir::RecordDescription;

use crate::{error::LowerError, model::TypeDeclaration};

/// Name of the nested builder type.
pub const BUILDER_TYPE: &str = "Builder";

/// Name of the validation-failure type nested in the builder.
pub const VALIDATION_EXCEPTION: &str = "ValidationException";

/// Names of members the builder pattern generates; neither the record nor
/// its fields may reuse them.
const GENERATED_MEMBERS: &[&str] = &[
    BUILDER_TYPE,
    VALIDATION_EXCEPTION,
    "ToString",
    "Equals",
    "Validate",
    "Build",
];

const ERROR_LIST: &str = "global::System.Collections.Generic.List<string>";
const ERROR_COLLECTION: &str = "global::System.Collections.Generic.IReadOnlyCollection<string>";

/// Expand a record description into its builder-pattern class declaration.
///
/// # Errors
///
/// Returns a [`LowerError`] if the description is malformed. No partial tree
/// is produced in that case.
pub fn lower(record: &RecordDescription) -> Result<TypeDeclaration, LowerError> {
    check(record)?;

    Ok(TypeDeclaration::new(&record.name)
        .partial()
        .base(format!("global::System.IEquatable<{}>", record.name))
        .constructor(record::primary_constructor(record))
        .member(record::to_string_method(record))
        .member(record::equals_method(record))
        .member(record::object_equals_method(record))
        .member(builder::builder_type(record)))
}

/// Expand a record description into a partial class with a single
/// constructor taking one camel-cased parameter per field.
///
/// # Errors
///
/// Returns a [`LowerError`] if the description is malformed or two fields
/// map to the same parameter name.
pub fn lower_constructor(record: &RecordDescription) -> Result<TypeDeclaration, LowerError> {
    check_constructor(record)?;
    Ok(constructor::constructor_type(record))
}

/// Check that a record description can be lowered with [`lower`].
///
/// # Errors
///
/// Returns the first problem found, checking the type name first and then
/// each field in order.
pub fn check(record: &RecordDescription) -> Result<(), LowerError> {
    check_record(record, GENERATED_MEMBERS)
}

/// Check that a record description can be lowered with [`lower_constructor`].
///
/// # Errors
///
/// Returns the first problem found, including parameter name collisions
/// such as `_name` next to `Name`.
pub fn check_constructor(record: &RecordDescription) -> Result<(), LowerError> {
    check_record(record, &[])?;

    let mut params = IndexSet::with_capacity(record.fields.len());
    for field in &record.fields {
        let param = parameter_name(&field.name);
        if !params.insert(param.clone()) {
            return Err(LowerError::DuplicateParameter {
                record: record.name.clone(),
                parameter: param,
            });
        }
    }
    Ok(())
}

/// Names, types and duplicates. `reserved` lists generated member names
/// that neither the record nor a field may take.
fn check_record(record: &RecordDescription, reserved: &[&str]) -> Result<(), LowerError> {
    if record.name.is_empty() {
        return Err(LowerError::EmptyTypeName);
    }
    check_identifier(&record.name, "record")?;
    if reserved.contains(&record.name.as_str()) {
        return Err(LowerError::MemberConflict {
            record: record.name.clone(),
            name: record.name.clone(),
        });
    }

    let mut seen = IndexSet::with_capacity(record.fields.len());
    for (index, field) in record.fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(LowerError::EmptyFieldName {
                record: record.name.clone(),
                index,
            });
        }
        check_identifier(&field.name, "field")?;
        if field.ty.trim().is_empty() {
            return Err(LowerError::EmptyFieldType {
                record: record.name.clone(),
                field: field.name.clone(),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(LowerError::DuplicateField {
                record: record.name.clone(),
                field: field.name.clone(),
            });
        }
        if field.name == record.name || reserved.contains(&field.name.as_str()) {
            return Err(LowerError::MemberConflict {
                record: record.name.clone(),
                name: field.name.clone(),
            });
        }
    }

    Ok(())
}

fn check_identifier(name: &str, kind: &'static str) -> Result<(), LowerError> {
    if is_csharp_keyword(name) {
        return Err(LowerError::ReservedKeyword {
            kind,
            name: name.to_string(),
        });
    }
    if let Some(reason) = validate_identifier(name) {
        return Err(LowerError::InvalidIdentifier {
            kind,
            name: name.to_string(),
            reason,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use recgen_ir::RecordField;

    use super::*;
    use crate::{builder::Render, model::Node};

    fn person() -> RecordDescription {
        RecordDescription::new("Person")
            .field(RecordField::new("Name", "string"))
            .field(RecordField::new("Age", "int?").optional())
    }

    fn member_names(decl: &TypeDeclaration) -> Vec<String> {
        decl.members
            .iter()
            .map(|m| match m {
                Node::Type(t) => format!("class {}", t.name),
                Node::Method(m) => format!("{}({})", m.name, m.params.len()),
                Node::Field(f) => format!("prop {}", f.name),
                other => format!("{:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_member_order() {
        let decl = lower(&person()).unwrap();
        assert_eq!(decl.constructors.len(), 1);
        assert_eq!(
            member_names(&decl),
            vec!["ToString(0)", "Equals(1)", "Equals(1)", "class Builder"]
        );
        assert!(decl.is_partial);
        assert_eq!(decl.bases, vec!["global::System.IEquatable<Person>"]);
    }

    #[test]
    fn test_builder_member_order() {
        let decl = lower(&person()).unwrap();
        let builder = decl.nested_type(BUILDER_TYPE).unwrap();
        assert_eq!(builder.constructors.len(), 2);
        assert_eq!(
            member_names(builder),
            vec![
                "prop Name",
                "prop Age",
                "Validate(0)",
                "Build(0)",
                "class ValidationException"
            ]
        );
    }

    #[test]
    fn test_lowering_is_deterministic() {
        let record = person();
        let first = lower(&record).unwrap().to_text();
        let second = lower(&record).unwrap().to_text();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_type_name() {
        let record = RecordDescription::new("");
        assert_eq!(lower(&record).unwrap_err(), LowerError::EmptyTypeName);
    }

    #[test]
    fn test_empty_field_name() {
        let record = RecordDescription::new("Person")
            .field(RecordField::new("Name", "string"))
            .field(RecordField::new("", "string"));
        assert_eq!(
            check(&record).unwrap_err(),
            LowerError::EmptyFieldName {
                record: "Person".into(),
                index: 1
            }
        );
    }

    #[test]
    fn test_empty_field_type() {
        let record = RecordDescription::new("Person").field(RecordField::new("Name", "  "));
        assert!(matches!(
            check(&record),
            Err(LowerError::EmptyFieldType { ref field, .. }) if field == "Name"
        ));
    }

    #[test]
    fn test_duplicate_field() {
        let record = RecordDescription::new("Person")
            .field(RecordField::new("Name", "string"))
            .field(RecordField::new("Age", "int"))
            .field(RecordField::new("Name", "string"));
        let err = lower(&record).unwrap_err();
        assert_eq!(
            err,
            LowerError::DuplicateField {
                record: "Person".into(),
                field: "Name".into()
            }
        );
        assert_eq!(err.code(), "duplicate_field");
    }

    #[test]
    fn test_invalid_identifiers() {
        let bad_type = RecordDescription::new("My Type");
        assert!(matches!(
            check(&bad_type),
            Err(LowerError::InvalidIdentifier { kind: "record", .. })
        ));

        let keyword = RecordDescription::new("Person").field(RecordField::new("class", "string"));
        assert!(matches!(
            check(&keyword),
            Err(LowerError::ReservedKeyword { kind: "field", .. })
        ));
    }

    #[test]
    fn test_generated_member_conflicts() {
        let same_as_type =
            RecordDescription::new("Person").field(RecordField::new("Person", "string"));
        assert!(matches!(
            check(&same_as_type),
            Err(LowerError::MemberConflict { .. })
        ));

        let builder_field =
            RecordDescription::new("Person").field(RecordField::new("Builder", "string"));
        assert!(matches!(
            check(&builder_field),
            Err(LowerError::MemberConflict { .. })
        ));

        let builder_type = RecordDescription::new("Builder");
        assert!(matches!(
            check(&builder_type),
            Err(LowerError::MemberConflict { .. })
        ));
    }

    #[test]
    fn test_zero_fields_is_legal() {
        let decl = lower(&RecordDescription::new("Empty")).unwrap();
        let ctor = &decl.constructors[0];
        assert!(ctor.params.is_empty());
        assert!(ctor.body.is_empty());
    }

    #[test]
    fn test_record_named_like_generated_member() {
        let record = RecordDescription::new("Equals").field(RecordField::new("Name", "string"));
        assert!(matches!(
            check(&record),
            Err(LowerError::MemberConflict { .. })
        ));
        assert!(check_constructor(&record).is_ok());
    }

    #[test]
    fn test_system_named_members_stay_qualified() {
        let record = RecordDescription::new("Host")
            .field(RecordField::new("System", "string"))
            .field(RecordField::new("Name", "string"));
        let text = lower(&record).unwrap().to_text();

        assert!(text.contains("this.System = System;"));
        for (pos, _) in text.match_indices("System.") {
            assert!(
                text[..pos].ends_with("global::"),
                "unqualified System reference at {pos}"
            );
        }
    }

    #[test]
    fn test_constructor_pattern_checks_names() {
        let record = RecordDescription::new("Service")
            .field(RecordField::new("Service", "int"));
        assert!(matches!(
            lower_constructor(&record),
            Err(LowerError::MemberConflict { .. })
        ));

        let blank = RecordDescription::new("Service").field(RecordField::new("_id", " "));
        assert!(matches!(
            lower_constructor(&blank),
            Err(LowerError::EmptyFieldType { .. })
        ));
    }

    #[test]
    fn test_constructor_parameter_collision() {
        let record = RecordDescription::new("Service")
            .field(RecordField::new("_name", "string"))
            .field(RecordField::new("Name", "string"));
        let err = lower_constructor(&record).unwrap_err();
        assert_eq!(
            err,
            LowerError::DuplicateParameter {
                record: "Service".into(),
                parameter: "name".into()
            }
        );
        // Both are fine for the builder pattern.
        assert!(check(&record).is_ok());
    }
}
