//! The nested `Builder` type and its validation-failure type.

use recgen_ir::{RecordDescription, RecordField};

use super::{BUILDER_TYPE, ERROR_COLLECTION, ERROR_LIST, VALIDATION_EXCEPTION};
use crate::model::{
    AssignmentStatement, Constructor, ConstructorInvocation, FieldDeclaration, MethodDeclaration,
    Parameter, Statement, TypeDeclaration, Visibility,
};

pub(super) fn builder_type(record: &RecordDescription) -> TypeDeclaration {
    TypeDeclaration::new(BUILDER_TYPE)
        .constructor(Constructor::new(BUILDER_TYPE))
        .constructor(copy_constructor(record))
        .members(record.fields.iter().map(builder_property))
        .member(validate_method(record))
        .member(build_method(record))
        .member(validation_exception())
}

/// `Builder(T source)`: start from an existing instance.
fn copy_constructor(record: &RecordDescription) -> Constructor {
    Constructor::new(BUILDER_TYPE)
        .param(Parameter::new("source", &record.name))
        .assignments(record.fields.iter().map(|f| {
            AssignmentStatement::new(format!("this.{}", f.name), format!("source.{}", f.name))
        }))
}

/// Builder properties are always settable, whatever the record declares.
fn builder_property(field: &RecordField) -> FieldDeclaration {
    FieldDeclaration::new(&field.name, &field.ty)
        .settable()
        .default_value(field.default.clone())
}

fn validate_method(record: &RecordDescription) -> MethodDeclaration {
    let checks = record.required_fields().map(|f| {
        Statement::new(format!(
            "if (this.{name} is null) errors.Add(\"{name} is null\");",
            name = f.name
        ))
    });

    MethodDeclaration::new("Validate", "void")
        .statement(Statement::new(format!("var errors = new {ERROR_LIST}();")))
        .statements(checks)
        .statement(Statement::new(format!(
            "if (errors.Count > 0) throw new {VALIDATION_EXCEPTION}(errors);"
        )))
}

fn build_method(record: &RecordDescription) -> MethodDeclaration {
    MethodDeclaration::new("Build", &record.name)
        .statement(Statement::new("Validate();"))
        .statement(ConstructorInvocation::new(&record.name).args(record.field_names()))
}

fn validation_exception() -> TypeDeclaration {
    let ctor = Constructor::new(VALIDATION_EXCEPTION)
        .param(Parameter::new("errors", ERROR_COLLECTION))
        .base_call(["GetMessage(errors)"])
        .assign("Errors", "errors");

    let get_message = MethodDeclaration::new("GetMessage", "string")
        .visibility(Visibility::Private)
        .static_()
        .param(Parameter::new("errors", ERROR_COLLECTION))
        .statement(Statement::new(
            "return global::System.String.Join(global::System.Environment.NewLine, errors);",
        ));

    TypeDeclaration::new(VALIDATION_EXCEPTION)
        .base("global::System.Exception")
        .constructor(ctor)
        .member(FieldDeclaration::new("Errors", ERROR_COLLECTION))
        .member(get_message)
}
